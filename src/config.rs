use std::ffi::OsString;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::canvas::{Color, Palette};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_SCALE: f32 = 3.0;
pub const DEFAULT_DELAY_MS: u64 = 20;
pub const DEFAULT_BG_COLOR: Color = Color(0x0000_00FF);
pub const DEFAULT_FG_COLOR: Color = Color(0xFFFF_FFFF);
pub const DEFAULT_CP_COLOR: Color = Color(0x4444_44FF);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    InvalidArguments(#[from] clap::Error),
}

/// Startup settings, fixed for the lifetime of the program.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub delay: Duration,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            palette: Palette {
                background: DEFAULT_BG_COLOR,
                foreground: DEFAULT_FG_COLOR,
                ghost: DEFAULT_CP_COLOR,
            },
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Startup {
    Run(Config),
    Help,
}

// `-h` is the grid height, so clap's own help flag is switched off and the
// `help` word is handled as a positional command instead.
#[derive(Debug, Parser)]
#[command(name = "game-of-life", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(short = 'w', long, value_name = "WIDTH", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    #[arg(short = 'h', long, value_name = "HEIGHT", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    #[arg(short = 's', long, value_name = "SCALE", default_value_t = DEFAULT_SCALE,
          value_parser = parse_scale)]
    scale: f32,
    #[arg(short = 'd', long, value_name = "DELAY", default_value_t = DEFAULT_DELAY_MS)]
    delay: u64,
    #[arg(short = 'b', long = "bg-color", value_name = "BG_COLOR", value_parser = parse_color)]
    bg_color: Option<Color>,
    #[arg(short = 'f', long = "fg-color", value_name = "FG_COLOR", value_parser = parse_color)]
    fg_color: Option<Color>,
    #[arg(short = 'c', long = "cursor-color", value_name = "CP_COLOR", value_parser = parse_color)]
    cp_color: Option<Color>,
    #[arg(value_name = "COMMAND")]
    command: Vec<String>,
}

impl Config {
    /// Parses a full argument list, program name first.
    pub fn parse_from<I, T>(args: I) -> Result<Startup, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        if cli.command.len() == 1 && cli.command[0] == "help" {
            return Ok(Startup::Help);
        }

        Ok(Startup::Run(Config {
            width: cli.width,
            height: cli.height,
            scale: cli.scale,
            delay: Duration::from_millis(cli.delay),
            palette: Palette {
                background: cli.bg_color.unwrap_or(DEFAULT_BG_COLOR),
                foreground: cli.fg_color.unwrap_or(DEFAULT_FG_COLOR),
                ghost: cli.cp_color.unwrap_or(DEFAULT_CP_COLOR),
            },
        }))
    }

    /// Size of the drawing surface in device pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            scaled(self.width, self.scale),
            scaled(self.height, self.scale),
        )
    }
}

/// Usage text printed by the `help` command.
pub fn usage() -> String {
    format!(
        "Usage: game-of-life [-w WIDTH] [-h HEIGHT] [-s SCALE] [-d DELAY] [-b BG_COLOR] [-f FG_COLOR] [-c CP_COLOR]\n\
         \n\
         Default values:\n\
         \x20 WIDTH -- {}\n\
         \x20 HEIGHT -- {}\n\
         \x20 SCALE -- {}\n\
         \x20 DELAY -- {}\n\
         \x20 BG_COLOR -- {}\n\
         \x20 FG_COLOR -- {}\n\
         \x20 CP_COLOR -- {}\n",
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
        DEFAULT_SCALE,
        DEFAULT_DELAY_MS,
        DEFAULT_BG_COLOR,
        DEFAULT_FG_COLOR,
        DEFAULT_CP_COLOR,
    )
}

pub(crate) fn scaled(cells: u32, scale: f32) -> u32 {
    ((f64::from(cells) * f64::from(scale)).ceil() as u32).max(1)
}

fn parse_scale(value: &str) -> Result<f32, String> {
    let scale: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be positive, got {}", value))
    }
}

fn parse_color(value: &str) -> Result<Color, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);
    if digits.is_empty() || digits.len() > 8 {
        return Err(format!("`{}` is not an RRGGBBAA hex color", value));
    }
    u32::from_str_radix(digits, 16)
        .map(Color)
        .map_err(|_| format!("`{}` is not an RRGGBBAA hex color", value))
}
