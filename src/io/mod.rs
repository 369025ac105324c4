// Purpose - external interfaces, format conversions

pub mod converter;

use crate::config::OutputMode;

/// Broadcast one mono sample to every slot of an interleaved frame.
#[inline]
pub fn write_frame(frame: &mut [f32], sample: f32, mode: OutputMode) {
    match mode {
        OutputMode::Multiply => frame.iter_mut().for_each(|s| *s *= sample),
        OutputMode::Overwrite => frame.fill(sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_layers_over_existing_content() {
        let mut frame = [0.5, -1.0];
        write_frame(&mut frame, 0.5, OutputMode::Multiply);
        assert_eq!(frame, [0.25, -0.5]);
    }

    #[test]
    fn overwrite_replaces_content() {
        let mut frame = [0.5, -1.0, 3.0];
        write_frame(&mut frame, 0.2, OutputMode::Overwrite);
        assert_eq!(frame, [0.2, 0.2, 0.2]);
    }
}
