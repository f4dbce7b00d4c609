// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-file interpreter
//!
//! Drives render sessions from a plain-text command stream.
//!
//! # Format
//!
//! One command per line, tokens separated by whitespace. Blank lines and
//! lines starting with `#` are ignored.
//!
//! ```text
//! png 64 64 out.png
//! position 4  -1 -1 0 1   1 -1 0 1   0 1 0 1
//! color 3     1 0 0       0 1 0      0 0 1
//! drawArraysTriangles 0 3
//! ```
//!
//! - `png W H FILE` starts a session with a W x H framebuffer
//! - `position SIZE v...` loads positions, SIZE components each (1-4)
//! - `color SIZE v...` loads colors, SIZE components each (3-4)
//! - `drawArraysTriangles FIRST COUNT` draws COUNT/3 triangles
//!
//! # Errors
//!
//! A malformed line stops processing with a [`FormatError`] carrying the
//! line number. A rejected draw request is logged and skipped unless
//! [`RenderConfig::abort_on_draw_error`] is set.

use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, error, info};

use super::config::RenderConfig;
use super::error::{FormatError, RasterError, Result};
use super::raster::{Color, DrawStats, Framebuffer, RenderSession, Vertex};

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `png W H FILE`
    Png {
        width: usize,
        height: usize,
        output: PathBuf,
    },
    /// `position SIZE v...`
    Position(Vec<Vertex>),
    /// `color SIZE v...`
    Color(Vec<Color>),
    /// `drawArraysTriangles FIRST COUNT`
    DrawArraysTriangles { first: usize, count: usize },
}

impl Command {
    /// Verb as written in command files
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Png { .. } => "png",
            Command::Position(_) => "position",
            Command::Color(_) => "color",
            Command::DrawArraysTriangles { .. } => "drawArraysTriangles",
        }
    }

    /// Parse one line of a command file
    ///
    /// Returns `Ok(None)` for blank lines and comments. `line` is the
    /// 1-based line number used in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use softrast::core::command::Command;
    ///
    /// let cmd = Command::parse_line(1, "drawArraysTriangles 0 3").unwrap();
    /// assert_eq!(cmd, Some(Command::DrawArraysTriangles { first: 0, count: 3 }));
    ///
    /// assert_eq!(Command::parse_line(2, "  # comment").unwrap(), None);
    /// ```
    pub fn parse_line(line: usize, text: &str) -> std::result::Result<Option<Self>, FormatError> {
        let mut tokens = text.split_whitespace();

        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        if verb.starts_with('#') {
            return Ok(None);
        }

        let args: Vec<&str> = tokens.collect();

        let command = match verb {
            "png" => {
                let [width, height, output] = args[..] else {
                    return Err(FormatError::MissingArgument {
                        line,
                        verb: "png",
                        expected: "WIDTH HEIGHT FILE",
                    });
                };
                let width: usize = parse_number(line, width)?;
                let height: usize = parse_number(line, height)?;
                if width == 0 || height == 0 || !Framebuffer::fits(width, height) {
                    return Err(FormatError::InvalidDimensions {
                        line,
                        width,
                        height,
                    });
                }
                Command::Png {
                    width,
                    height,
                    output: PathBuf::from(output),
                }
            }
            "position" => {
                let (size, values) = parse_attribute(line, "position", &args, 1..=4)?;
                Command::Position(
                    values
                        .chunks_exact(size)
                        .map(Vertex::from_components)
                        .collect(),
                )
            }
            "color" => {
                let (size, values) = parse_attribute(line, "color", &args, 3..=4)?;
                Command::Color(
                    values
                        .chunks_exact(size)
                        .filter_map(Color::from_components)
                        .collect(),
                )
            }
            "drawArraysTriangles" => {
                let [first, count] = args[..] else {
                    return Err(FormatError::MissingArgument {
                        line,
                        verb: "drawArraysTriangles",
                        expected: "FIRST COUNT",
                    });
                };
                Command::DrawArraysTriangles {
                    first: parse_number(line, first)?,
                    count: parse_number(line, count)?,
                }
            }
            other => {
                return Err(FormatError::UnknownCommand {
                    line,
                    verb: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}

/// Parse a whole command file, stopping at the first malformed line
///
/// Each command is paired with its 1-based line number.
pub fn parse_script(text: &str) -> std::result::Result<Vec<(usize, Command)>, FormatError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(command) = Command::parse_line(index + 1, line)? {
            commands.push((index + 1, command));
        }
    }
    Ok(commands)
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> std::result::Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parse `SIZE v...` into the component size and the flat value list
fn parse_attribute(
    line: usize,
    verb: &'static str,
    args: &[&str],
    sizes: std::ops::RangeInclusive<usize>,
) -> std::result::Result<(usize, Vec<f32>), FormatError> {
    let Some((size, values)) = args.split_first() else {
        return Err(FormatError::MissingArgument {
            line,
            verb,
            expected: "SIZE followed by values",
        });
    };

    let size: usize = parse_number(line, size)?;
    if !sizes.contains(&size) {
        return Err(FormatError::InvalidComponentSize { line, verb, size });
    }

    let values = values
        .iter()
        .map(|token| {
            let value: f32 = parse_number(line, token)?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(FormatError::InvalidNumber {
                    line,
                    token: token.to_string(),
                })
            }
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if values.len() % size != 0 {
        return Err(FormatError::ValueCountMismatch {
            line,
            count: values.len(),
            size,
        });
    }

    Ok((size, values))
}

/// A finished image waiting to be encoded
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub output: PathBuf,
    pub framebuffer: Framebuffer,
}

/// Totals over every draw request of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub draw_calls: usize,
    pub rejected_draw_calls: usize,
    pub triangles: DrawStats,
}

/// Executes commands against the current render session
///
/// # Example
///
/// ```
/// use softrast::core::command::Interpreter;
/// use softrast::core::config::RenderConfig;
///
/// let mut interpreter = Interpreter::new(RenderConfig::default());
/// interpreter
///     .run(
///         "png 4 4 out.png\n\
///          position 2 -1 1  1 1  -1 -1\n\
///          color 3 1 0 0  0 1 0  0 0 1\n\
///          drawArraysTriangles 0 3\n",
///     )
///     .unwrap();
///
/// let images = interpreter.finish();
/// assert_eq!(images.len(), 1);
/// assert_eq!(images[0].framebuffer.width(), 4);
/// ```
#[derive(Debug)]
pub struct Interpreter {
    config: RenderConfig,
    current: Option<(PathBuf, RenderSession)>,
    finished: Vec<RenderedImage>,
    summary: RunSummary,
}

impl Interpreter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            current: None,
            finished: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// The session currently receiving commands, if any
    pub fn session(&self) -> Option<&RenderSession> {
        self.current.as_ref().map(|(_, session)| session)
    }

    /// Parse and execute a whole command file
    ///
    /// Parsing happens line by line as execution proceeds, so commands
    /// before a malformed line have already taken effect when the error is
    /// returned.
    pub fn run(&mut self, text: &str) -> Result<()> {
        for (index, line) in text.lines().enumerate() {
            if let Some(command) = Command::parse_line(index + 1, line)? {
                self.execute(index + 1, &command)?;
            }
        }
        Ok(())
    }

    /// Execute a single command
    pub fn execute(&mut self, line: usize, command: &Command) -> Result<()> {
        match command {
            Command::Png {
                width,
                height,
                output,
            } => {
                self.finish_current();
                info!(
                    "Starting {}x{} session for {} ({} fill)",
                    width,
                    height,
                    output.display(),
                    self.config.fill_strategy
                );
                let session = RenderSession::new(*width, *height, self.config.fill_strategy);
                self.current = Some((output.clone(), session));
            }
            Command::Position(positions) => {
                self.session_mut(line, command.verb())?
                    .load_positions(positions.clone());
            }
            Command::Color(colors) => {
                self.session_mut(line, command.verb())?
                    .load_colors(colors.clone());
            }
            Command::DrawArraysTriangles { first, count } => {
                let abort = self.config.abort_on_draw_error;
                let result = self
                    .session_mut(line, command.verb())?
                    .draw_arrays_triangles(*first, *count);

                self.summary.draw_calls += 1;
                match result {
                    Ok(stats) => self.summary.triangles += stats,
                    Err(e) => {
                        self.summary.rejected_draw_calls += 1;
                        error!("line {}: draw request rejected: {}", line, e);
                        if abort {
                            return Err(RasterError::Index(e));
                        }
                    }
                }
            }
        }

        debug!("line {}: executed {}", line, command.verb());
        Ok(())
    }

    /// Finish the current session and return every completed image
    pub fn finish(mut self) -> Vec<RenderedImage> {
        self.finish_current();
        self.finished
    }

    fn finish_current(&mut self) {
        if let Some((output, session)) = self.current.take() {
            self.finished.push(RenderedImage {
                output,
                framebuffer: session.into_framebuffer(),
            });
        }
    }

    fn session_mut(
        &mut self,
        line: usize,
        verb: &'static str,
    ) -> std::result::Result<&mut RenderSession, FormatError> {
        self.current
            .as_mut()
            .map(|(_, session)| session)
            .ok_or(FormatError::NoSession { line, verb })
    }
}
