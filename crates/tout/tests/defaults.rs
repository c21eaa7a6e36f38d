use std::io::{BufWriter, Result, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tout::opt::Options;
use tout::palette;
use tout::style::{Attribute, Fidelity, Format};
use tout::termco::{AnsiColor, Colorant, Rgb};
use tout::{BoxedOutput, Output};

// The default outputs are process-wide, so tests touching them run one at a
// time.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// A writer whose bytes remain accessible after it has been boxed.
#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Vec<u8>>>);

impl Shared {
    fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.lock().unwrap());
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for Shared {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

fn install(fidelity: Fidelity) -> (Shared, Shared) {
    let out = Shared::default();
    let err = Shared::default();
    tout::set_output(Output::with_fidelity(Box::new(out.clone()), fidelity));
    let mut error_output: BoxedOutput = Output::with_fidelity(Box::new(err.clone()), fidelity);
    error_output.set_foreground(Rgb::new(255, 0, 0));
    tout::set_error_output(error_output);
    (out, err)
}

#[test]
fn test_default_output() -> Result<()> {
    let _guard = serial();
    let (out, _) = install(Fidelity::TwentyFourBit);

    tout::print("plain")?;
    tout::foreground(AnsiColor::GREEN);
    tout::add_style(Attribute::Underlined);
    tout::add_style(Attribute::Blinking);
    tout::println("styled")?;
    assert_eq!(out.take(), "plain\x1b[32;5;4mstyled\x1b[0m\n");

    tout::remove_style(Attribute::Blinking);
    assert_eq!(tout::format(), Format::from(Attribute::Underlined));
    tout::reset_foreground();
    tout::background(Colorant::EightBit(236));
    tout::printf!("{:03}", 7)?;
    tout::write(b" raw")?;
    assert_eq!(out.take(), "\x1b[48;5;236;4m007\x1b[0m raw");

    tout::reset_format();
    tout::reset_background();
    tout::default_foreground();
    tout::default_background();
    tout::print('x')?;
    tout::reset_foreground();
    tout::reset_background();
    tout::set_format(Attribute::Italic + Attribute::Bold);
    tout::print("y")?;
    tout::flush()?;
    assert_eq!(out.take(), "\x1b[39;49mx\x1b[0m\x1b[1;3my\x1b[0m");
    Ok(())
}

#[test]
fn test_default_error_output() -> Result<()> {
    let _guard = serial();
    let (out, err) = install(Fidelity::TwentyFourBit);

    tout::error("bad")?;
    tout::errorln(42)?;
    tout::errorf!("{}!", "worse")?;
    assert_eq!(
        err.take(),
        "\x1b[38;2;255;0;0mbad\x1b[0m\x1b[38;2;255;0;0m42\x1b[0m\n\x1b[38;2;255;0;0mworse!\x1b[0m"
    );
    assert_eq!(out.take(), "");
    Ok(())
}

#[test]
fn test_negotiated_error_color() -> Result<()> {
    let _guard = serial();
    let (_, err) = install(Fidelity::Ansi);

    // The 24-bit red is not covered and hence unset.
    tout::errorln("oops")?;
    assert_eq!(err.take(), "oops\n");

    tout::with_error_output(|o| o.set_foreground(AnsiColor::BRIGHT_RED));
    tout::error("oops")?;
    assert_eq!(err.take(), "\x1b[91moops\x1b[0m");
    Ok(())
}

#[test]
fn test_replacing_outputs() -> Result<()> {
    let _guard = serial();
    let (first, _) = install(Fidelity::Ansi);
    tout::foreground(AnsiColor::BLUE);

    let second = Shared::default();
    let previous = tout::set_output(Output::boxed(second.clone()));
    let previous = previous.map(|o| o.state().clone());
    assert_eq!(
        previous.as_ref().and_then(|s| s.foreground().copied()),
        Some(Colorant::Ansi(AnsiColor::BLUE))
    );

    // A boxed output is plain.
    tout::foreground(AnsiColor::BLUE);
    tout::println("hello")?;
    assert_eq!(second.take(), "hello\n");
    assert_eq!(first.take(), "");

    let fidelity = tout::with_output(|o| {
        o.set_fidelity(Fidelity::EightBit);
        o.fidelity()
    });
    assert_eq!(fidelity, Fidelity::EightBit);
    tout::foreground(Colorant::EightBit(208));
    tout::print("!")?;
    assert_eq!(second.take(), "\x1b[38;5;208m!\x1b[0m");
    Ok(())
}

#[test]
fn test_init_with_options() -> Result<()> {
    let _guard = serial();

    let options = Options::builder()
        .fidelity(Fidelity::Ansi)
        .error_color(AnsiColor::MAGENTA)
        .build();
    tout::init(&options)?;
    assert_eq!(tout::with_output(|o| o.fidelity()), Fidelity::Ansi);
    assert_eq!(tout::with_output(|o| o.state().foreground().copied()), None);
    assert_eq!(
        tout::with_error_output(|o| o.state().foreground().copied()),
        Some(Colorant::Ansi(AnsiColor::MAGENTA))
    );

    let options = Options::builder()
        .fidelity(Fidelity::Plain)
        .plain_errors()
        .build();
    tout::init(&options)?;
    assert_eq!(tout::with_error_output(|o| o.fidelity()), Fidelity::Plain);
    assert_eq!(tout::with_error_output(|o| o.state().foreground().copied()), None);
    Ok(())
}

#[test]
fn test_error_output_starts_red() -> Result<()> {
    let _guard = serial();

    tout::init(&Options::with_fidelity(Fidelity::TwentyFourBit))?;
    assert_eq!(
        tout::with_error_output(|o| o.state().foreground().copied()),
        Some(Colorant::Rgb(palette::rgb::RED))
    );

    // Redirecting keeps the color, which renders again at full fidelity.
    let err = Shared::default();
    tout::with_error_output(|o| {
        o.set_writer(Box::new(err.clone()));
        o.set_fidelity(Fidelity::TwentyFourBit);
    });
    tout::errorln("bad")?;
    assert_eq!(err.take(), "\x1b[38;2;255;0;0mbad\x1b[0m\n");

    // The default options negotiate the red away at lower fidelity.
    tout::init(&Options::with_fidelity(Fidelity::EightBit))?;
    assert_eq!(tout::with_error_output(|o| o.state().foreground().copied()), None);
    Ok(())
}

#[test]
fn test_init_flushes_replaced_outputs() -> Result<()> {
    let _guard = serial();

    let out = Shared::default();
    let err = Shared::default();
    tout::set_output(Output::boxed(BufWriter::new(out.clone())));
    tout::set_error_output(Output::boxed(BufWriter::new(err.clone())));
    tout::print("pending")?;
    tout::error("pending too")?;
    assert_eq!(out.take(), "");
    assert_eq!(err.take(), "");

    tout::init(&Options::with_fidelity(Fidelity::Plain))?;
    assert_eq!(out.take(), "pending");
    assert_eq!(err.take(), "pending too");
    Ok(())
}
