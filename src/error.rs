#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("No fields to search")]
    NoFields,
    #[error("No terms to search for")]
    NoTerms,
    #[error("No fields to compare with")]
    NoOtherFields,
}

/// Fail with `err` if `items` is empty.
pub(crate) fn require<I>(items: &[I], err: Error) -> Result<(), Error> {
    match items.is_empty() {
        true => {
            log::debug!("Refusing to build predicate: {err}");
            Err(err)
        }
        false => Ok(()),
    }
}
