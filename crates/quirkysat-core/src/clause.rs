//! The clause abstraction.
//!
//! A clause is anything that can be invoked with a model's input and answers
//! yes or no. Plain closures qualify directly. Types that need private state
//! across invocations implement [`Clause`] themselves and mutate that state
//! through `&mut self`.

use std::convert::Infallible;

/// A boolean predicate over an input of type `I`.
///
/// `E` is the fault a clause may raise. Faults are handed back to the caller
/// of the model unmodified; models never catch or wrap them. Clauses that
/// cannot fail use the default `Infallible`.
///
/// Every `FnMut(&I) -> bool + Send` closure is a clause for any `E`.
///
/// # Example
///
/// ```
/// use quirkysat_core::Clause;
///
/// // Passes every other call, whatever the input.
/// struct Alternating {
///     next: bool,
/// }
///
/// impl Clause<i64> for Alternating {
///     fn evaluate(&mut self, _input: &i64) -> Result<bool, std::convert::Infallible> {
///         self.next = !self.next;
///         Ok(!self.next)
///     }
/// }
///
/// let mut clause = Alternating { next: true };
/// assert_eq!(clause.evaluate(&7), Ok(true));
/// assert_eq!(clause.evaluate(&7), Ok(false));
/// ```
pub trait Clause<I: ?Sized, E = Infallible>: Send {
    /// Evaluates the clause against `input`.
    fn evaluate(&mut self, input: &I) -> Result<bool, E>;
}

impl<I, E, F> Clause<I, E> for F
where
    I: ?Sized,
    F: FnMut(&I) -> bool + Send,
{
    #[inline]
    fn evaluate(&mut self, input: &I) -> Result<bool, E> {
        Ok(self(input))
    }
}

/// A type-erased clause as stored by models.
pub type BoxedClause<I, E = Infallible> = Box<dyn Clause<I, E>>;

/// Boxes a clause.
#[inline]
pub fn boxed<I, E, C>(clause: C) -> BoxedClause<I, E>
where
    I: ?Sized,
    C: Clause<I, E> + 'static,
{
    Box::new(clause)
}

/// A clause wrapping a closure that may fail.
///
/// # Example
///
/// ```
/// use quirkysat_core::{Clause, FallibleFn};
///
/// let mut parses = FallibleFn::new(|s: &str| s.parse::<i64>().map(|n| n > 0));
///
/// assert_eq!(parses.evaluate("12"), Ok(true));
/// assert!(parses.evaluate("twelve").is_err());
/// ```
pub struct FallibleFn<F> {
    f: F,
}

impl<F> FallibleFn<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<I, E, F> Clause<I, E> for FallibleFn<F>
where
    I: ?Sized,
    F: FnMut(&I) -> Result<bool, E> + Send,
{
    #[inline]
    fn evaluate(&mut self, input: &I) -> Result<bool, E> {
        (self.f)(input)
    }
}

/// Negates a clause.
pub struct Not<C> {
    inner: C,
}

impl<C> Not<C> {
    #[inline]
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<I, E, C> Clause<I, E> for Not<C>
where
    I: ?Sized,
    C: Clause<I, E>,
{
    #[inline]
    fn evaluate(&mut self, input: &I) -> Result<bool, E> {
        Ok(!self.inner.evaluate(input)?)
    }
}

/// Transforms the input before handing it to an inner clause.
///
/// The inner clause may be a whole model, which lets one model delegate a
/// derived view of its input to a sub-model.
///
/// # Example
///
/// ```
/// use quirkysat_core::{Clause, Mapped};
///
/// let mut sum_is_even = Mapped::new(
///     |pair: &(i64, i64)| pair.0 + pair.1,
///     |sum: &i64| sum % 2 == 0,
/// );
///
/// let ok: Result<bool, std::convert::Infallible> = sum_is_even.evaluate(&(3, 5));
/// assert_eq!(ok, Ok(true));
/// ```
pub struct Mapped<F, C> {
    map: F,
    inner: C,
}

impl<F, C> Mapped<F, C> {
    #[inline]
    pub fn new(map: F, inner: C) -> Self {
        Self { map, inner }
    }
}

impl<J, I, E, F, C> Clause<J, E> for Mapped<F, C>
where
    J: ?Sized,
    F: FnMut(&J) -> I + Send,
    C: Clause<I, E>,
{
    #[inline]
    fn evaluate(&mut self, input: &J) -> Result<bool, E> {
        let mapped = (self.map)(input);
        self.inner.evaluate(&mapped)
    }
}
