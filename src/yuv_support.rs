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

/// Declares the order of the interleaved chroma pair.
///
/// NV12 stores `U,V,U,V,...`, NV21 stores `V,U,V,U,...`. Both formats share the same
/// byte layout otherwise: a full resolution luma plane followed by one chroma pair per
/// 2x2 luma block.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

/// Chroma order of NV12 frames
pub const NV12: YuvNVOrder = YuvNVOrder::UV;
/// Chroma order of NV21 frames, the default Android camera preview format
pub const NV21: YuvNVOrder = YuvNVOrder::VU;

impl YuvNVOrder {
    #[inline]
    pub const fn get_u_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 0,
            YuvNVOrder::VU => 1,
        }
    }

    #[inline]
    pub const fn get_v_position(&self) -> usize {
        match self {
            YuvNVOrder::UV => 1,
            YuvNVOrder::VU => 0,
        }
    }

    /// Returns the opposite order, NV12 becomes NV21 and vice versa.
    #[inline]
    pub const fn flip(&self) -> YuvNVOrder {
        match self {
            YuvNVOrder::UV => YuvNVOrder::VU,
            YuvNVOrder::VU => YuvNVOrder::UV,
        }
    }

    pub const fn fourcc(&self) -> [u8; 4] {
        match self {
            YuvNVOrder::UV => *b"NV12",
            YuvNVOrder::VU => *b"NV21",
        }
    }

    pub fn from_fourcc(fourcc: &[u8; 4]) -> Option<YuvNVOrder> {
        match fourcc {
            b"NV12" => Some(YuvNVOrder::UV),
            b"NV21" => Some(YuvNVOrder::VU),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_are_complementary() {
        for order in [YuvNVOrder::UV, YuvNVOrder::VU] {
            assert_eq!(order.get_u_position() + order.get_v_position(), 1);
            assert_eq!(order.flip().get_u_position(), order.get_v_position());
            assert_eq!(order.flip().flip(), order);
        }
    }

    #[test]
    fn test_fourcc() {
        assert_eq!(YuvNVOrder::from_fourcc(b"NV12"), Some(NV12));
        assert_eq!(YuvNVOrder::from_fourcc(b"NV21"), Some(NV21));
        assert_eq!(YuvNVOrder::from_fourcc(b"YUYV"), None);
        assert_eq!(&NV21.fourcc(), b"NV21");
    }
}
