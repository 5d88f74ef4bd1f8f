/*
 * Copyright (c) Radzivon Bartoshyk, 11/2024. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum YuvError {
    ZeroBaseSize,
    OddDimensions(ImageDimensions),
    PointerOverflow,
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    ImageDimensionsNotMatch,
}

impl YuvError {
    /// Buffer shorter than the frame described by the dimensions.
    pub fn is_invalid_buffer_length(&self) -> bool {
        matches!(
            self,
            YuvError::SourceSizeMismatch(_) | YuvError::DestinationSizeMismatch(_)
        )
    }

    /// Zero, odd or unaddressable dimensions.
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(
            self,
            YuvError::ZeroBaseSize
                | YuvError::OddDimensions(_)
                | YuvError::PointerOverflow
                | YuvError::ImageDimensionsNotMatch
        )
    }
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::OddDimensions(dims) => f.write_fmt(format_args!(
                "NV frames must have even dimensions, but it was {}x{}",
                dims.width, dims.height
            )),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination must have size at least {} but it is {}",
                size.expected, size.received
            )),
            YuvError::ImageDimensionsNotMatch => {
                f.write_str("Source and destination images dimensions must match")
            }
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<(), YuvError> {
    let (product0, overflow) = v0.overflowing_mul(v1);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    let (_, overflow) = product0.overflowing_mul(v2);
    if overflow {
        return Err(YuvError::PointerOverflow);
    }
    Ok(())
}

/// Validates NV 4:2:0 dimensions and returns the frame size in samples.
#[inline]
pub(crate) fn check_nv_dimensions(width: u32, height: u32) -> Result<usize, YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(YuvError::OddDimensions(ImageDimensions { width, height }));
    }
    check_overflow_v3(width as usize, height as usize, 3)?;
    Ok(width as usize * height as usize * 3 / 2)
}

#[inline]
pub(crate) fn check_nv_source<V>(src: &[V], frame_size: usize) -> Result<(), YuvError> {
    if src.len() < frame_size {
        return Err(YuvError::SourceSizeMismatch(MismatchedSize {
            expected: frame_size,
            received: src.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_nv_destination<V>(dst: &[V], frame_size: usize) -> Result<(), YuvError> {
    if dst.len() < frame_size {
        return Err(YuvError::DestinationSizeMismatch(MismatchedSize {
            expected: frame_size,
            received: dst.len(),
        }));
    }
    Ok(())
}
