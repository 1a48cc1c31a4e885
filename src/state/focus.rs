use crate::core::NodeId;

#[derive(Debug, Default, Clone)]
pub struct FocusState {
    targets: Vec<NodeId>,
    index: Option<usize>,
}

impl FocusState {
    pub fn new(targets: impl IntoIterator<Item = impl Into<NodeId>>) -> Self {
        let targets: Vec<NodeId> = targets.into_iter().map(Into::into).collect();
        let index = (!targets.is_empty()).then_some(0);
        Self { targets, index }
    }

    pub fn current_id(&self) -> Option<&str> {
        self.index
            .and_then(|i| self.targets.get(i))
            .map(String::as_str)
    }

    pub fn set_focus_by_id(&mut self, id: &str) -> bool {
        match self.targets.iter().position(|target| target == id) {
            Some(pos) => {
                self.index = Some(pos);
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + 1) % self.targets.len());
    }

    pub fn prev(&mut self) {
        let Some(current) = self.index else {
            return;
        };
        self.index = Some((current + self.targets.len() - 1) % self.targets.len());
    }
}

#[cfg(test)]
mod tests {
    use super::FocusState;

    #[test]
    fn starts_on_first_target_and_wraps() {
        let mut focus = FocusState::new(["a", "b", "c"]);
        assert_eq!(focus.current_id(), Some("a"));
        focus.prev();
        assert_eq!(focus.current_id(), Some("c"));
        focus.next();
        focus.next();
        assert_eq!(focus.current_id(), Some("b"));
    }

    #[test]
    fn empty_focus_stays_empty() {
        let mut focus = FocusState::new(Vec::<String>::new());
        focus.next();
        assert_eq!(focus.current_id(), None);
    }

    #[test]
    fn unknown_id_keeps_current_focus() {
        let mut focus = FocusState::new(["a", "b"]);
        assert!(!focus.set_focus_by_id("zzz"));
        assert_eq!(focus.current_id(), Some("a"));
        assert!(focus.set_focus_by_id("b"));
        assert_eq!(focus.current_id(), Some("b"));
    }
}
