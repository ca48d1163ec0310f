//! Combinators for joining independently computed results.
//!
//! Store and snapshot operations report expected failures through
//! `Result` with typed error enums. When several independent checks
//! run together, callers want every failure reported at once rather
//! than only the first; [`Combine`] provides that join.

/// Joins a tuple of independent `Result`s into a single `Result`.
///
/// Succeeds with the tuple of success values only when every input
/// succeeded. Otherwise fails with every error value, in input order.
///
/// Implemented for tuples of arity 2 through 4 whose members share an
/// error type.
pub trait Combine {
    /// Tuple of success values.
    type Output;
    /// Shared error type of the inputs.
    type Error;

    /// Collapses the inputs, collecting all errors.
    fn combine(self) -> Result<Self::Output, Vec<Self::Error>>;
}

macro_rules! impl_combine {
    ($($t:ident => $r:ident),+) => {
        impl<$($t,)+ E> Combine for ($(Result<$t, E>,)+) {
            type Output = ($($t,)+);
            type Error = E;

            fn combine(self) -> Result<Self::Output, Vec<E>> {
                let ($($r,)+) = self;
                match ($($r,)+) {
                    ($(Ok($r),)+) => Ok(($($r,)+)),
                    ($($r,)+) => {
                        let mut errors = Vec::new();
                        $(
                            if let Err(error) = $r {
                                errors.push(error);
                            }
                        )+
                        Err(errors)
                    }
                }
            }
        }
    };
}

impl_combine!(T1 => r1, T2 => r2);
impl_combine!(T1 => r1, T2 => r2, T3 => r3);
impl_combine!(T1 => r1, T2 => r2, T3 => r3, T4 => r4);
