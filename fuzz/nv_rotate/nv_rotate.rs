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

#![no_main]

use camyuv::{nv21_rotate90_to_nv12, rotate90_cw};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, Vec<u8>)| {
    fuzz_rotate(data.0, data.1, &data.2);
});

fn fuzz_rotate(i_width: u8, i_height: u8, src: &[u8]) {
    let width = i_width as u32;
    let height = i_height as u32;

    let rotated = match rotate90_cw(src, width, height) {
        Ok(rotated) => rotated,
        Err(_) => {
            assert!(nv21_rotate90_to_nv12(src, width, height).is_err());
            return;
        }
    };

    let frame_size = width as usize * height as usize * 3 / 2;
    assert_eq!(rotated.len(), frame_size);

    let mut frame = rotated;
    let (mut w, mut h) = (height, width);
    for _ in 0..3 {
        frame = rotate90_cw(&frame, w, h).unwrap();
        std::mem::swap(&mut w, &mut h);
    }
    assert_eq!(frame.as_slice(), &src[..frame_size]);
}
