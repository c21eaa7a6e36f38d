use std::io::Result;

use tout::palette::{basic, eight_bit, rgb};
use tout::style::Attribute;
use tout::termco::{AnsiColor, Colorant};

fn main() -> Result<()> {
    tout::println("")?;

    // The 16 ANSI colors
    for color in AnsiColor::all() {
        tout::background(color);
        tout::print("  ")?;
    }
    tout::reset_background();
    tout::println("")?;

    // The named colors in all three formats
    tout::foreground(basic::TEAL);
    tout::print("basic ")?;
    tout::foreground(Colorant::EightBit(eight_bit::ORANGE));
    tout::print("eight-bit ")?;
    tout::foreground(rgb::PURPLE);
    tout::println("rgb")?;

    // Text attributes, each combined with bold
    tout::reset_foreground();
    for attr in Attribute::DISPLAY_ORDER {
        tout::set_format(Attribute::Bold + attr);
        tout::printf!("{:?} ", attr)?;
    }
    tout::reset_format();
    tout::println("")?;

    tout::errorln("This line goes to standard error.")?;
    tout::flush()
}
