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
//! Chroma reordering and rotation of camera NV12/NV21 frames.
//!
//! Frames are contiguous 4:2:0 semi-planar buffers: `width * height` luma samples followed by
//! `width * height / 2` interleaved chroma samples. Width and height must be even.
//!
//! ```
//! use camyuv::{nv21_to_nv12, rotate90_cw};
//!
//! let nv21 = [16u8, 32, 48, 64, 200, 100];
//! let mut nv12 = [0u8; 6];
//! nv21_to_nv12(&nv21, &mut nv12, 2, 2).unwrap();
//! assert_eq!(nv12, [16, 32, 48, 64, 100, 200]);
//!
//! let rotated = rotate90_cw(&nv12, 2, 2).unwrap();
//! assert_eq!(rotated, vec![48, 16, 64, 32, 100, 200]);
//! ```
#![forbid(unsafe_code)]

mod images;
mod nv_rotate;
mod nv_swap;
mod yuv_error;
mod yuv_support;

pub use images::{nv_frame_size, BufferStoreMut, YuvNvFrame, YuvNvFrameMut};
pub use nv_rotate::{
    nv21_rotate90_to_nv12, rotate90_cw, rotate90_cw_into, rotate90_cw_p16, rotate_nv_frame,
};
pub use nv_swap::{
    convert_nv_frame, nv12_to_nv21, nv12_to_nv21_p16, nv21_to_nv12, nv21_to_nv12_p16,
    nv_swap_chroma_in_place,
};
pub use yuv_error::{ImageDimensions, MismatchedSize, YuvError};
pub use yuv_support::{YuvNVOrder, NV12, NV21};
