use thiserror::Error;

/// No element satisfied the search predicate before the source ran out.
///
/// Returned by [`find`](crate::terminal::find) and [`find2`](crate::terminal::find2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("no element found")]
pub struct NotFound;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(NotFound.to_string(), "no element found");
    }

    #[test]
    fn test_not_found_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NotFound);
        assert!(err.source().is_none());
    }
}
