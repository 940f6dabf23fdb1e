//! Walking `source()` links.

use std::error::Error;

/// Iterator over an error followed by each of its successive causes.
///
/// # Examples
///
/// ```
/// use errbase::{chain, ErrBase};
///
/// let inner = ErrBase::wrap("read config", "permission denied");
/// let outer = ErrBase::wrap("start server", inner);
///
/// let messages: Vec<String> = chain(&outer).map(|e| e.to_string()).collect();
/// assert_eq!(messages.len(), 3);
/// assert_eq!(messages[2], "permission denied");
/// ```
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate over `err` and every cause beneath it.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Find the first link of the chain whose concrete type is `T`.
///
/// `err` itself is checked first, so an error matches its own type.
///
/// # Examples
///
/// ```
/// use errbase::{find, ErrBase};
///
/// let io = std::io::Error::other("disk full");
/// let err = ErrBase::wrap("save failed", io);
///
/// let found = find::<std::io::Error>(&err).expect("io error in chain");
/// assert_eq!(found.kind(), std::io::ErrorKind::Other);
/// assert!(find::<std::fmt::Error>(&err).is_none());
/// ```
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(err).find_map(|link| link.downcast_ref::<T>())
}

/// The deepest link of the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}
