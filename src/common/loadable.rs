/// Lifecycle of a fetched collection, as the page renders it.
///
/// Every list view goes through the same states: a spinner while the request
/// is in flight, an inline alert when it failed, an explicit "no data"
/// message for an empty result, and the list itself otherwise. Keeping the
/// decision here (instead of ad hoc `if` chains per page) guarantees an
/// empty server array never renders a blank screen.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

/// What the view should show for a [`Loadable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Spinner,
    Error(String),
    Empty,
    Items(usize),
}

impl<T> Loadable<T> {
    pub fn view(&self) -> ListView {
        match self {
            Loadable::Loading => ListView::Spinner,
            Loadable::Failed(msg) => ListView::Error(msg.clone()),
            Loadable::Ready(items) if items.is_empty() => ListView::Empty,
            Loadable::Ready(items) => ListView::Items(items.len()),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Loadable::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_renders_explicit_empty_state() {
        let loaded: Loadable<u32> = Loadable::Ready(vec![]);
        assert_eq!(loaded.view(), ListView::Empty);
    }

    #[test]
    fn test_failed_fetch_renders_error_not_blank() {
        let loaded: Loadable<u32> = Loadable::Failed("boom".into());
        assert_eq!(loaded.view(), ListView::Error("boom".into()));
    }

    #[test]
    fn test_ready_list_preserves_order_and_content() {
        let loaded = Loadable::Ready(vec![3, 1, 2]);
        assert_eq!(loaded.view(), ListView::Items(3));
        assert_eq!(loaded.items(), &[3, 1, 2]);

        // Re-fetching identical data yields an identical rendered list.
        let refetched = Loadable::Ready(vec![3, 1, 2]);
        assert_eq!(loaded, refetched);
    }
}
