//! Specification walker
//!
//! Scans a whitespace-free specification left to right. `,` separates
//! siblings, `.` descends, `[` opens a group scoped to the preceding key and
//! `]` closes it. Each group is walked by a recursive call that reports how
//! many characters it consumed, so the caller can resume after the group.

use super::Selection;
use crate::errors::{DataExError, Result};
use crate::options::ExtractOptions;

/// Result of walking one group
#[derive(Debug)]
pub(crate) struct Walk {
    pub selections: Vec<Selection>,
    /// Characters consumed, including the closing `]` (or the end-of-input
    /// position for a group that is never closed)
    pub consumed: usize,
}

pub(crate) struct Walker<'a> {
    chars: &'a [char],
    options: &'a ExtractOptions,
}

impl<'a> Walker<'a> {
    pub fn new(chars: &'a [char], options: &'a ExtractOptions) -> Self {
        Self { chars, options }
    }

    /// Walk the group starting at `start`
    ///
    /// `inherited` is the trajectory every key of this group starts from and
    /// `opened_at` is the position of the `[` that opened it (`None` for the
    /// top level).
    pub fn walk(
        &self,
        start: usize,
        inherited: &[String],
        opened_at: Option<usize>,
    ) -> Result<Walk> {
        let strict = self.options.is_strict();
        let mut selections = Vec::new();
        let mut trajectory = inherited.to_vec();
        let mut key = String::new();
        let mut after_group = false;
        let mut consumed = 0;
        let mut i = start;

        loop {
            consumed += 1;

            let Some(&current) = self.chars.get(i) else {
                if strict {
                    if let Some(position) = opened_at {
                        return Err(DataExError::UnclosedGroup { position });
                    }
                    if key.is_empty() && !after_group && i > start {
                        if let Some(&found) = self.chars.get(i - 1) {
                            return Err(DataExError::EmptyKey {
                                position: i - 1,
                                found,
                            });
                        }
                    }
                }
                flush(&mut selections, &trajectory, &mut key);
                return Ok(Walk {
                    selections,
                    consumed,
                });
            };

            match current {
                ',' => {
                    if strict && key.is_empty() && !after_group {
                        return Err(DataExError::EmptyKey {
                            position: i,
                            found: ',',
                        });
                    }
                    flush(&mut selections, &trajectory, &mut key);
                    trajectory = inherited.to_vec();
                    after_group = false;
                }
                ']' => {
                    if strict {
                        if opened_at.is_none() {
                            return Err(DataExError::UnexpectedClosingBracket { position: i });
                        }
                        if key.is_empty() && !after_group {
                            return Err(DataExError::EmptyKey {
                                position: i,
                                found: ']',
                            });
                        }
                    }
                    flush(&mut selections, &trajectory, &mut key);
                    return Ok(Walk {
                        selections,
                        consumed,
                    });
                }
                '[' => {
                    if strict {
                        self.reject_after_group(after_group, i, current)?;
                        if key.is_empty() {
                            return Err(DataExError::EmptyKey {
                                position: i,
                                found: '[',
                            });
                        }
                    }
                    // The group takes over the in-progress trajectory; until the
                    // next `,` this level continues from an empty one.
                    let mut group = std::mem::take(&mut trajectory);
                    group.push(std::mem::take(&mut key));
                    self.check_depth(group.len(), i)?;

                    let nested = self.walk(i + 1, &group, Some(i))?;
                    selections.extend(nested.selections);
                    consumed += nested.consumed;
                    i += nested.consumed;
                    after_group = true;
                }
                '.' => {
                    if strict {
                        self.reject_after_group(after_group, i, current)?;
                        if key.is_empty() {
                            return Err(DataExError::EmptyKey {
                                position: i,
                                found: '.',
                            });
                        }
                    }
                    trajectory.push(std::mem::take(&mut key));
                    self.check_depth(trajectory.len(), i)?;
                }
                other => {
                    if strict {
                        self.reject_after_group(after_group, i, other)?;
                    }
                    key.push(other);
                }
            }

            i += 1;
        }
    }

    fn check_depth(&self, depth: usize, position: usize) -> Result<()> {
        let limit = self.options.depth_limit();
        if depth > limit {
            return Err(DataExError::DepthExceeded {
                depth,
                limit,
                position,
            });
        }
        Ok(())
    }

    fn reject_after_group(&self, after_group: bool, position: usize, found: char) -> Result<()> {
        if after_group {
            return Err(DataExError::UnexpectedCharacter { position, found });
        }
        Ok(())
    }
}

/// Emit the pending key as a terminal; an empty buffer emits nothing
fn flush(selections: &mut Vec<Selection>, trajectory: &[String], key: &mut String) {
    if !key.is_empty() {
        selections.push(Selection::new(trajectory.to_vec(), std::mem::take(key)));
    }
}
