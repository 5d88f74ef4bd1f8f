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
use camyuv::{nv21_rotate90_to_nv12, nv21_to_nv12, nv_frame_size, rotate90_cw};
use rand::Rng;
use std::error::Error;
use std::time::Instant;

/// Usage: `app [input.nv21 width height [output.nv12]]`
///
/// Without arguments a random 1920x1080 NV21 frame is used.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (nv21, width, height) = if args.len() >= 3 {
        let width: u32 = args[1].parse()?;
        let height: u32 = args[2].parse()?;
        (std::fs::read(&args[0])?, width, height)
    } else {
        let (width, height) = (1920u32, 1080u32);
        let mut rng = rand::rng();
        let frame: Vec<u8> = (0..nv_frame_size(width, height)?)
            .map(|_| rng.random::<u8>())
            .collect();
        (frame, width, height)
    };

    println!("Frame {}x{}, {} bytes", width, height, nv21.len());

    let mut nv12 = vec![0u8; nv_frame_size(width, height)?];
    let start_time = Instant::now();
    nv21_to_nv12(&nv21, &mut nv12, width, height)?;
    println!("NV21 -> NV12 time: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    let rotated = rotate90_cw(&nv21, width, height)?;
    println!("Rotate 90 time: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    let encoder_frame = nv21_rotate90_to_nv12(&nv21, width, height)?;
    println!("Rotate 90 + NV12 time: {:?}", start_time.elapsed());

    let mut swapped = vec![0u8; rotated.len()];
    nv21_to_nv12(&rotated, &mut swapped, height, width)?;
    assert_eq!(swapped, encoder_frame, "Fused path diverged");

    if let Some(output) = args.get(3) {
        std::fs::write(output, &encoder_frame)?;
        println!("Saved {}x{} NV12 to {}", height, width, output);
    }

    Ok(())
}
