pub trait Lookup {
    /// evaluates a single query point
    fn eval(&self, input: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, inputs: &[f64]) -> Vec<f64> {
        inputs.iter().map(|&x| self.eval(x)).collect()
    }
}
