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
use crate::images::{BufferStoreMut, YuvNvFrame, YuvNvFrameMut};
use crate::yuv_error::{check_nv_destination, check_nv_dimensions, check_nv_source};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Rotates a contiguous NV frame 90 degrees clockwise.
///
/// Destination is `height x width`. Destination luma row `x` is source luma column `x`
/// read bottom to top, destination chroma row `c` is source chroma pair column `c` read
/// bottom to top. Bytes inside a chroma pair keep their order unless `SWAP_CHROMA` is set.
fn rotate90_cw_impl<V: Copy + Send + Sync, const SWAP_CHROMA: bool>(
    src: &[V],
    dst: &mut [V],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let frame_size = check_nv_dimensions(width, height)?;
    check_nv_source(src, frame_size)?;
    check_nv_destination(dst, frame_size)?;

    let width = width as usize;
    let height = height as usize;
    let luma_size = width * height;

    let (src_y, src_uv) = src[..frame_size].split_at(luma_size);
    let (dst_y, dst_uv) = dst[..frame_size].split_at_mut(luma_size);

    // Rotated luma rows hold `height` samples, rotated chroma rows hold `height / 2` pairs
    let y_iter;
    let uv_iter;
    #[cfg(feature = "rayon")]
    {
        y_iter = dst_y.par_chunks_exact_mut(height);
        uv_iter = dst_uv.par_chunks_exact_mut(height);
    }
    #[cfg(not(feature = "rayon"))]
    {
        y_iter = dst_y.chunks_exact_mut(height);
        uv_iter = dst_uv.chunks_exact_mut(height);
    }

    y_iter.enumerate().for_each(|(x, dst_row)| {
        for (dst, src_row) in dst_row.iter_mut().zip(src_y.chunks_exact(width).rev()) {
            *dst = src_row[x];
        }
    });

    let first = SWAP_CHROMA as usize;
    let second = 1 - first;

    uv_iter.enumerate().for_each(|(cx, dst_row)| {
        let pair = cx * 2;
        for (dst, src_row) in dst_row
            .chunks_exact_mut(2)
            .zip(src_uv.chunks_exact(width).rev())
        {
            dst[0] = src_row[pair + first];
            dst[1] = src_row[pair + second];
        }
    });

    Ok(())
}

fn rotate90_cw_alloc<V: Copy + Default + Send + Sync, const SWAP_CHROMA: bool>(
    src: &[V],
    width: u32,
    height: u32,
) -> Result<Vec<V>, YuvError> {
    let frame_size = check_nv_dimensions(width, height)?;
    check_nv_source(src, frame_size)?;
    let mut dst = vec![V::default(); frame_size];
    rotate90_cw_impl::<V, SWAP_CHROMA>(src, &mut dst, width, height)?;
    Ok(dst)
}

/// Rotates NV12 or NV21 frame 90 degrees clockwise.
///
/// Chroma order is preserved, the rotated frame is `height x width` and has the
/// same length of `width * height * 3 / 2` bytes. Nothing is allocated when
/// validation fails.
///
/// # Arguments
///
/// * `src`: Source frame, at least `width * height * 3 / 2` bytes
/// * `width`: Image width, must be even
/// * `height`: Image height, must be even
///
/// returns: Result<Vec<u8>, [YuvError]>
///
pub fn rotate90_cw(src: &[u8], width: u32, height: u32) -> Result<Vec<u8>, YuvError> {
    rotate90_cw_alloc::<u8, false>(src, width, height)
}

/// Rotates NV12 or NV21 frame 90 degrees clockwise into a caller provided buffer.
///
/// # Arguments
///
/// * `src`: Source frame, at least `width * height * 3 / 2` bytes
/// * `dst`: Destination frame, at least `width * height * 3 / 2` bytes
/// * `width`: Source image width, must be even
/// * `height`: Source image height, must be even
///
/// returns: Result<(), [YuvError]>
///
pub fn rotate90_cw_into(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    rotate90_cw_impl::<u8, false>(src, dst, width, height)
}

/// Rotates 16 bit NV frame 90 degrees clockwise.
///
/// returns: Result<Vec<u16>, [YuvError]>
///
pub fn rotate90_cw_p16(src: &[u16], width: u32, height: u32) -> Result<Vec<u16>, YuvError> {
    rotate90_cw_alloc::<u16, false>(src, width, height)
}

/// Rotates NV21 camera frame 90 degrees clockwise and writes it as NV12.
///
/// This is the usual step between a portrait camera preview and a
/// hardware encoder expecting semi-planar `U,V` input.
///
/// # Arguments
///
/// * `src`: Source NV21 frame, at least `width * height * 3 / 2` bytes
/// * `width`: Source image width, must be even
/// * `height`: Source image height, must be even
///
/// returns: Result<Vec<u8>, [YuvError]>
///
pub fn nv21_rotate90_to_nv12(src: &[u8], width: u32, height: u32) -> Result<Vec<u8>, YuvError> {
    rotate90_cw_alloc::<u8, true>(src, width, height)
}

/// Rotates frame 90 degrees clockwise, result has swapped dimensions and same chroma order.
pub fn rotate_nv_frame(src: &YuvNvFrame<u8>) -> Result<YuvNvFrameMut<'static, u8>, YuvError> {
    src.check_constraints()?;
    let data = rotate90_cw(src.data, src.width, src.height)?;
    Ok(YuvNvFrameMut {
        data: BufferStoreMut::Owned(data),
        width: src.height,
        height: src.width,
        order: src.order,
    })
}
