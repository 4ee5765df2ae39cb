//! Root of the activity tree.
//!
//! Three strong branches run in lock-step, in producer-before-consumer
//! order: the press recognizer publishes a classification, the
//! calculator reacts to it and sets the segments, the display driver
//! writes them out.

use crate::activity::{Activity, Branch, Par};
use crate::calculator::Calculator;
use crate::display::{DisplayDriver, SegmentSink};
use crate::frame::{Edges, Frame};
use crate::press::{DualPressRecognizer, PressRecognizer};

type Root<R, S> = Par<(Branch<R>, Branch<Calculator>, Branch<DisplayDriver<S>>)>;

/// The whole calculator, driven one tick at a time.
///
/// `R` is the press recognizer: [`PressRecognizer`] for the single-button
/// build, [`DualPressRecognizer`] when a second button stands in for the
/// double press.
pub struct App<S, R = PressRecognizer> {
    root: Root<R, S>,
    frame: Frame,
}

impl<S: SegmentSink> App<S, PressRecognizer> {
    pub fn new(sink: S) -> Self {
        Self::with_recognizer(PressRecognizer::new(), sink)
    }
}

impl<S: SegmentSink> App<S, DualPressRecognizer> {
    pub fn dual(sink: S) -> Self {
        Self::with_recognizer(DualPressRecognizer::new(), sink)
    }
}

impl<S, R> App<S, R>
where
    S: SegmentSink,
    R: Activity<Frame>,
{
    fn with_recognizer(recognizer: R, sink: S) -> Self {
        Self {
            root: Par::new((
                Branch::strong(recognizer),
                Branch::strong(Calculator::new()),
                Branch::strong(DisplayDriver::new(sink)),
            )),
            frame: Frame::new(),
        }
    }

    /// Runs one tick with the primary button's edges.
    pub fn tick(&mut self, primary: Edges) {
        self.tick_dual(primary, Edges::NONE);
    }

    /// Runs one tick with both buttons' edges.
    pub fn tick_dual(&mut self, primary: Edges, secondary: Edges) {
        self.frame.primary = primary;
        self.frame.secondary = secondary;
        self.root.step(&mut self.frame);
    }

    /// Frame as left by the latest tick.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn recognizer(&self) -> &R {
        self.root.branches().0.activity()
    }

    pub fn calculator(&self) -> &Calculator {
        self.root.branches().1.activity()
    }

    pub fn sink(&self) -> &S {
        self.root.branches().2.activity().sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.root.branches_mut().2.activity_mut().sink_mut()
    }

    /// Back to power-up state. The next tick rewrites the display.
    pub fn reset(&mut self) {
        Activity::<Frame>::reset(&mut self.root);
        self.frame = Frame::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PhaseKind;
    use crate::press::{Press, RecognizerState};
    use crate::segment::Segments;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Recorder(Vec<Segments>);

    impl SegmentSink for Recorder {
        type Error = Infallible;

        fn show(&mut self, segments: Segments) -> Result<(), Infallible> {
            self.0.push(segments);
            Ok(())
        }
    }

    #[test]
    fn first_tick_shows_the_animation() {
        let mut app = App::new(Recorder::default());
        app.tick(Edges::NONE);
        assert_eq!(app.sink().0, vec![Segments::circle(0)]);
        assert_eq!(app.recognizer().state(), RecognizerState::Idle);
    }

    #[test]
    fn classification_reaches_the_calculator_in_the_same_tick() {
        let mut app = App::new(Recorder::default());
        for edges in [Edges::PRESSED, Edges::RELEASED, Edges::NONE] {
            app.tick(edges);
        }
        assert_eq!(app.calculator().phase(), PhaseKind::Animate);
        app.tick(Edges::NONE);
        assert_eq!(app.frame().press, Press::Short);
        assert_eq!(app.calculator().phase(), PhaseKind::FirstOperand);
        assert_eq!(app.sink().0.last(), Some(&Segments::digit(0)));
    }

    #[test]
    fn secondary_button_leaves_the_animation() {
        let mut app = App::dual(Recorder::default());
        app.tick(Edges::NONE);
        app.tick_dual(Edges::NONE, Edges::PRESSED);
        assert_eq!(app.frame().press, Press::Double);
        assert_eq!(app.calculator().phase(), PhaseKind::FirstOperand);
    }

    #[test]
    fn reset_restores_power_up_state() {
        let mut app = App::new(Recorder::default());
        for edges in [Edges::PRESSED, Edges::RELEASED, Edges::NONE, Edges::NONE] {
            app.tick(edges);
        }
        app.reset();
        app.sink_mut().0.clear();
        app.tick(Edges::NONE);
        assert_eq!(app.calculator().phase(), PhaseKind::Animate);
        assert_eq!(app.sink().0, vec![Segments::circle(0)]);
    }
}
