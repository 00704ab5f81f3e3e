//=========================================================================
// Framing Target
//=========================================================================
//
// Output side of the framing camera. Whatever renders the scene owns the
// real virtual-camera parameters; the framing camera only writes them.
//
//=========================================================================

//=== FramingTarget =======================================================

/// Virtual-camera parameters written by [`FramingCamera`] each tick.
///
/// [`FramingCamera`]: super::FramingCamera
pub trait FramingTarget {
    /// Distance from the followed rig to the camera.
    fn set_distance(&mut self, distance: f32);

    /// Normalized screen position of the followed rig.
    fn set_screen_offset(&mut self, x: f32, y: f32);
}

impl<T: FramingTarget + ?Sized> FramingTarget for Box<T> {
    fn set_distance(&mut self, distance: f32) {
        (**self).set_distance(distance);
    }

    fn set_screen_offset(&mut self, x: f32, y: f32) {
        (**self).set_screen_offset(x, y);
    }
}

//=== FramingBody =========================================================

/// Plain framing-target record.
///
/// Renderers that do not keep their own camera state can read this
/// directly after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FramingBody {
    pub camera_distance: f32,
    pub screen_x: f32,
    pub screen_y: f32,
}

impl FramingTarget for FramingBody {
    fn set_distance(&mut self, distance: f32) {
        self.camera_distance = distance;
    }

    fn set_screen_offset(&mut self, x: f32, y: f32) {
        self.screen_x = x;
        self.screen_y = y;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_records_writes() {
        let mut body = FramingBody::default();
        body.set_distance(12.0);
        body.set_screen_offset(0.25, 0.75);

        assert_eq!(
            body,
            FramingBody { camera_distance: 12.0, screen_x: 0.25, screen_y: 0.75 }
        );
    }

    #[test]
    fn boxed_target_forwards() {
        fn write<T: FramingTarget>(target: &mut T) {
            target.set_distance(3.0);
            target.set_screen_offset(0.1, 0.2);
        }

        let mut boxed = Box::new(FramingBody::default());
        write(&mut boxed);

        assert_eq!(boxed.camera_distance, 3.0);
        assert_eq!((boxed.screen_x, boxed.screen_y), (0.1, 0.2));
    }
}
