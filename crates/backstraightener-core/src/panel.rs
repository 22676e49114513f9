use crate::timer::DisplayTriple;

/// The surface holding the three wheels.
///
/// The controller pushes a fresh triple on every tick and locks the wheels
/// for the duration of a run.
pub trait WheelPanel {
    fn show(&mut self, display: DisplayTriple);

    fn set_editable(&mut self, editable: bool);
}

impl<P: WheelPanel + ?Sized> WheelPanel for Box<P> {
    fn show(&mut self, display: DisplayTriple) {
        (**self).show(display)
    }

    fn set_editable(&mut self, editable: bool) {
        (**self).set_editable(editable)
    }
}
