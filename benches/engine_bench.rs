use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hammer::analysis::analyze;
use hammer::config::EngineConfig;
use hammer::protocol::notation::parse_sheet;
use hammer::protocol::wire::parse_request;
use hammer::search::search_free_spot;
use hammer::sheet::{Point, Stone, Team};
use hammer::shot::recommend;

/// A full end: eight stones per team, crowded around the button.
const FULL_END: &str = "b300:150,r330:150,b270:150,r300:180,b300:120,r330:180,b270:120,r330:120,b270:180,r240:150,b360:150,r300:210,b300:90,r360:120,b240:180,r360:180";

/// Enough clutter that the first rings of the spiral are all blocked.
fn crowded_button() -> Vec<Stone> {
    let mut stones = Vec::new();
    for ring in 0..4 {
        let r = 30.0 * ring as f64;
        for k in 0..12 {
            let a = (k as f64 * 30.0).to_radians();
            let team = if k % 2 == 0 { Team::Blue } else { Team::Red };
            stones.push(Stone::new(300.0 + r * a.cos(), 150.0 + r * a.sin(), team));
        }
    }
    stones
}

fn bench_analyze(c: &mut Criterion) {
    let stones = parse_sheet(FULL_END).unwrap();
    let config = EngineConfig::default();
    c.bench_function("analyze_full_end", |b| {
        b.iter(|| analyze(black_box(&stones), black_box(&config.geometry)))
    });
}

fn bench_recommend_full_end(c: &mut Criterion) {
    let stones = parse_sheet(FULL_END).unwrap();
    let config = EngineConfig::default();
    c.bench_function("recommend_full_end_blue", |b| {
        b.iter(|| recommend(black_box(&stones), Team::Blue, black_box(&config)))
    });
}

fn bench_free_spot_worst_case(c: &mut Criterion) {
    let stones = crowded_button();
    let config = EngineConfig::default();
    c.bench_function("free_spot_crowded_button", |b| {
        b.iter(|| {
            search_free_spot(
                black_box(Point::new(300.0, 150.0)),
                black_box(&stones),
                &config.geometry,
                &config.search,
            )
        })
    });
}

fn bench_parse_request(c: &mut Criterion) {
    let json = r#"{"stones": [{"x": 300, "y": 150, "color": "red"}, {"x": 280.5, "y": 140, "color": "blue"}, {"x": 330, "y": 170, "color": "red"}], "team": "blue"}"#;
    c.bench_function("parse_json_request", |b| {
        b.iter(|| parse_request(black_box(json)))
    });
}

criterion_group!(
    benches,
    bench_analyze,
    bench_recommend_full_end,
    bench_free_spot_worst_case,
    bench_parse_request,
);
criterion_main!(benches);
