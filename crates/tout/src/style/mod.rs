//! Terminal-specific text formatting and styles.
//!
//! This module supports styling terminal output with ANSI SGR escape sequences
//! through a [`StyleState`], which combines an optional foreground
//! [`Colorant`](crate::termco::Colorant), an optional background
//! [`Colorant`](crate::termco::Colorant), and a [`Format`] with the
//! [`Fidelity`] of the output.
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors as well as [`Attribute`] for the individual text attributes.
//!
//!
//! # Negotiation
//!
//! Each colorant requires a minimum fidelity. When a style state is asked to
//! use a colorant its fidelity does not cover, it leaves the corresponding
//! color unset. It never substitutes a color from a different level. When the
//! fidelity is [`Fidelity::Plain`], the state renders nothing at all.
//!
//! ```
//! # use tout::style::{Fidelity, StyleState};
//! # use tout::termco::{AnsiColor, Rgb};
//! let mut state = StyleState::new(Fidelity::EightBit);
//! state.set_foreground(Rgb::new(215, 40, 39));
//! assert_eq!(state.foreground(), None);
//!
//! state.set_foreground(AnsiColor::RED);
//! assert_eq!(state.render_parameters(), "31");
//! ```
//!
//!
//! # Rendering
//!
//! Parameters are emitted in a fixed order: foreground color, background
//! color, and then the text attributes in [`Attribute::DISPLAY_ORDER`]. Styled
//! text is always followed by `ESC[0m`, which resets *all* attributes.
//!
//! ```
//! # use tout::style::{Attribute, Fidelity, StyleState};
//! # use tout::termco::AnsiColor;
//! let mut state = StyleState::new(Fidelity::Ansi);
//! state.set_background(AnsiColor::YELLOW);
//! state.add_style(Attribute::Underlined + Attribute::Bold);
//!
//! assert_eq!(&*state.render(b"Wow!"), b"\x1b[43;1;4mWow!\x1b[0m");
//! ```

mod context;
mod format;
mod state;

pub use context::{Fidelity, Layer};
pub use format::{Attribute, AttributeIter, Format};
pub use state::StyleState;
