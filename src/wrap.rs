/// Trait evaluating: f(x) with x in R^1.
///
/// Bracket search and bisection only ever need point evaluations, so they are
/// written against this trait.  `Polynomial` implements it directly and
/// closures go through `RealFn`.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Wraps function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<'a, F> RealFnEval for RealFn<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<T> RealFnEval for &T
where
    T: RealFnEval + ?Sized,
{
    fn eval_f(&self, x: f64) -> f64 {
        (**self).eval_f(x)
    }
}
