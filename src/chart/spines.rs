use super::{Axes, Rgb};

/// Restyle the borders of `axes`: light gray bottom and left borders, a hidden top border and
/// a white background. The right border is light gray when `right_border` is set and hidden
/// otherwise.
///
/// Hidden borders are painted white rather than removed.
pub fn format_spines(axes: &mut Axes, right_border: bool) {
    axes.spines.bottom = Rgb::LIGHT_GRAY;
    axes.spines.left = Rgb::LIGHT_GRAY;
    axes.spines.top = Rgb::WHITE;
    axes.spines.right = if right_border {
        Rgb::LIGHT_GRAY
    } else {
        Rgb::WHITE
    };
    axes.face_color = Rgb::WHITE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Spines;

    #[test]
    fn right_border_hidden() {
        let mut axes = Axes::default();
        axes.face_color = Rgb(0x10, 0x20, 0x30);
        format_spines(&mut axes, false);

        assert_eq!(
            axes.spines,
            Spines {
                top: Rgb::WHITE,
                bottom: Rgb::LIGHT_GRAY,
                left: Rgb::LIGHT_GRAY,
                right: Rgb::WHITE,
            }
        );
        assert_eq!(axes.face_color, Rgb::WHITE);
    }

    #[test]
    fn right_border_visible() {
        let mut axes = Axes::default();
        format_spines(&mut axes, true);

        assert_eq!(axes.spines.right, Rgb::LIGHT_GRAY);
        assert_eq!(axes.spines.top, Rgb::WHITE);
        assert_eq!(axes.spines.bottom, Rgb::LIGHT_GRAY);
        assert_eq!(axes.spines.left, Rgb::LIGHT_GRAY);
    }

    #[test]
    fn only_borders_and_background_change() {
        let mut axes = Axes::default();
        axes.set_title("kept", 14);
        axes.set_xlabel("x");
        let before = axes.clone();

        format_spines(&mut axes, false);

        assert_eq!(axes.title, before.title);
        assert_eq!(axes.x_label, before.x_label);
        assert_eq!(axes.series(), before.series());
    }
}
