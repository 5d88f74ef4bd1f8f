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
use crate::yuv_error::{check_nv_destination, check_nv_dimensions, check_nv_source};
use crate::yuv_support::YuvNVOrder;
use crate::YuvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Size in samples of a contiguous NV 4:2:0 frame: `width * height * 3 / 2`.
///
/// Fails on zero or odd dimensions, or when the size overflows `usize`.
pub fn nv_frame_size(width: u32, height: u32) -> Result<usize, YuvError> {
    check_nv_dimensions(width, height)
}

#[derive(Debug, Clone)]
/// Non-mutable representation of a contiguous NV12/NV21 frame.
///
/// The luma plane of `width * height` samples is immediately followed by
/// the interleaved chroma plane of `width * height / 2` samples, no padding.
pub struct YuvNvFrame<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    pub width: u32,
    pub height: u32,
    pub order: YuvNVOrder,
}

impl<T> YuvNvFrame<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        let frame_size = check_nv_dimensions(self.width, self.height)?;
        check_nv_source(self.data, frame_size)
    }

    /// Luma plane, truncated if the frame is shorter than its dimensions claim.
    pub fn y_plane(&self) -> &[T] {
        let luma_size = self.width as usize * self.height as usize;
        &self.data[..luma_size.min(self.data.len())]
    }

    /// Interleaved chroma plane, truncated if the frame is shorter than its dimensions claim.
    pub fn uv_plane(&self) -> &[T] {
        let luma_size = self.width as usize * self.height as usize;
        let frame_size = luma_size + luma_size / 2;
        &self.data[luma_size.min(self.data.len())..frame_size.min(self.data.len())]
    }
}

#[derive(Debug)]
/// Mutable representation of a contiguous NV12/NV21 frame
pub struct YuvNvFrameMut<'a, T>
where
    T: Copy + Debug,
{
    pub data: BufferStoreMut<'a, T>,
    pub width: u32,
    pub height: u32,
    pub order: YuvNVOrder,
}

impl<'a, T> YuvNvFrameMut<'a, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        let frame_size = check_nv_dimensions(self.width, self.height)?;
        check_nv_destination(self.data.borrow(), frame_size)
    }

    pub fn to_fixed(&'a self) -> YuvNvFrame<'a, T> {
        YuvNvFrame {
            data: self.data.borrow(),
            width: self.width,
            height: self.height,
            order: self.order,
        }
    }

    /// Releases the frame samples, copying them out if the storage was borrowed.
    pub fn into_owned(self) -> Vec<T> {
        match self.data {
            BufferStoreMut::Borrowed(p_ref) => p_ref.to_vec(),
            BufferStoreMut::Owned(vec) => vec,
        }
    }
}

impl<T> YuvNvFrameMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates mutable target frame with required chroma order
    pub fn alloc(width: u32, height: u32, order: YuvNVOrder) -> Self {
        let luma_size = width as usize * height as usize;
        let target = vec![T::default(); luma_size + luma_size / 2];
        YuvNvFrameMut {
            data: BufferStoreMut::Owned(target),
            width,
            height,
            order,
        }
    }
}
