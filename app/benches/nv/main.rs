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
use camyuv::{
    nv21_rotate90_to_nv12, nv21_to_nv12, nv_frame_size, nv_swap_chroma_in_place, rotate90_cw,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let dims = [(640u32, 480u32), (1280, 720), (1920, 1080), (3840, 2160)];
    let mut rng = rand::rng();

    for (width, height) in dims {
        let frame_size = nv_frame_size(width, height).unwrap();
        let src: Vec<u8> = (0..frame_size).map(|_| rng.random::<u8>()).collect();

        c.bench_function(&format!("camyuv: NV21 -> NV12 {}x{}", width, height), |b| {
            let mut dst = vec![0u8; frame_size];
            b.iter(|| {
                nv21_to_nv12(&src, &mut dst, width, height).unwrap();
            })
        });

        c.bench_function(&format!("camyuv: NV swap in place {}x{}", width, height), |b| {
            let mut dst = src.clone();
            b.iter(|| {
                nv_swap_chroma_in_place(&mut dst, width, height).unwrap();
            })
        });

        c.bench_function(&format!("camyuv: Rotate 90 {}x{}", width, height), |b| {
            b.iter(|| rotate90_cw(&src, width, height).unwrap())
        });

        c.bench_function(
            &format!("camyuv: Rotate 90 to NV12 {}x{}", width, height),
            |b| b.iter(|| nv21_rotate90_to_nv12(&src, width, height).unwrap()),
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
