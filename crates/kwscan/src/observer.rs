//! Hooks for reporting tokens as the driver discovers them.
//!
//! The scanner itself stays silent; [`parse_all_with`](crate::parse_all_with)
//! hands every accepted token to a [`TokenObserver`] before collecting it.

use tracing::debug;

use crate::scanner::Token;

/// Receives each token, in input order, as soon as it is accepted.
///
/// Tokens reported before a later failure are still reported; the driver
/// discards them afterwards.
pub trait TokenObserver {
    fn on_token(&mut self, index: usize, token: &Token<'_>);
}

/// Ignores every token.
impl TokenObserver for () {
    fn on_token(&mut self, _index: usize, _token: &Token<'_>) {}
}

/// Lets a caller keep ownership of its observer and inspect it afterwards.
impl<O: TokenObserver + ?Sized> TokenObserver for &mut O {
    fn on_token(&mut self, index: usize, token: &Token<'_>) {
        (**self).on_token(index, token);
    }
}

/// Emits a `debug` event per token.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

impl TokenObserver for TracingObserver {
    fn on_token(&mut self, index: usize, token: &Token<'_>) {
        debug!(
            index,
            quote = token.quote().name(),
            span = %token.span(),
            "token: {}",
            token.text()
        );
    }
}

/// Observer built from a closure. See [`from_fn`].
///
/// A blanket `FnMut` impl would overlap with the `&mut O` impl above.
#[derive(Clone, Debug)]
pub struct FnObserver<F>(F);

/// Wrap a closure as a [`TokenObserver`].
///
/// ```
/// let mut seen = Vec::new();
/// let tokens = kwscan::parse_all_with(
///     "'a' | 'b'",
///     kwscan::observer::from_fn(|index, token| seen.push((index, token.text().to_owned()))),
/// );
/// assert!(tokens.is_ok());
/// assert_eq!(seen, [(0, "a".to_owned()), (1, "b".to_owned())]);
/// ```
pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(usize, &Token<'_>),
{
    FnObserver(f)
}

impl<F> TokenObserver for FnObserver<F>
where
    F: FnMut(usize, &Token<'_>),
{
    fn on_token(&mut self, index: usize, token: &Token<'_>) {
        (self.0)(index, token);
    }
}
