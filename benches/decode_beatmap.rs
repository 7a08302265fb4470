//! Benchmark for `.osu` beatmap decoding.

use std::fmt::Write as _;

use criterion::{Criterion, Throughput};
use osu_rs::osu::decode_beatmap;

/// Builds a synthetic but structurally realistic map: full header
/// sections, a tempo change every 32 objects and an alternating
/// circle/slider/spinner object list.
fn synthetic_map(objects: usize) -> String {
    let mut source = String::from(
        "osu file format v14\n\n\
         [General]\n\
         AudioFilename: audio.mp3\n\
         PreviewTime: 1000\n\
         SampleSet: Soft\n\
         Mode: 0\n\n\
         [Metadata]\n\
         Title:Synthetic\n\
         Artist:Bench\n\
         Creator:criterion\n\
         Version:Insane\n\n\
         [Difficulty]\n\
         HPDrainRate:5\n\
         CircleSize:4\n\
         OverallDifficulty:8\n\
         ApproachRate:9\n\
         SliderMultiplier:1.8\n\
         SliderTickRate:1\n\n\
         [TimingPoints]\n",
    );
    for index in 0..objects / 32 + 1 {
        let _ = writeln!(source, "{},{},4,2,0,100,1,0", index * 8000, 300 + index % 7);
    }
    source.push_str("\n[HitObjects]\n");
    for index in 0..objects {
        let time = index * 250;
        let x = (index * 37) % 512;
        let y = (index * 53) % 384;
        match index % 3 {
            0 => {
                let _ = writeln!(source, "{x},{y},{time},1,0,0:0:0:0:");
            }
            1 => {
                let _ = writeln!(
                    source,
                    "{x},{y},{time},2,0,B|{}:{}|{}:{},1,140,0|2,0:0|0:0,0:0:0:0:",
                    (x + 40) % 512,
                    y,
                    (x + 80) % 512,
                    (y + 60) % 384,
                );
            }
            _ => {
                let _ = writeln!(source, "256,192,{time},12,4,{},0:0:0:0:", time + 200);
            }
        }
    }
    source
}

fn bench_decode_beatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_beatmap");

    for &objects in &[100usize, 1000, 5000] {
        let source = synthetic_map(objects);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{objects}_objects"), |b| {
            b.iter(|| decode_beatmap(std::hint::black_box(&source)));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_decode_beatmap(&mut criterion);
}
