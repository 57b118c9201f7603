/// Receives the value of a knob whenever its handle moves to another path
/// point.
pub trait ValueObserver {
    fn value_changed(&mut self, value: i32);
}

impl<F: FnMut(i32)> ValueObserver for F {
    fn value_changed(&mut self, value: i32) {
        (self)(value)
    }
}
