criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_ordinal_roll,
        sampling_parametric_roll,
        playing_ordinal_bulk_episodes,
        playing_parametric_bulk_episodes,
        playing_ordinal_sparse_episodes,
}

fn config(credit: Credit, movers: [Mover; 2]) -> Config {
    Config {
        credit,
        movers,
        seed: Some(0),
        ..Config::default()
    }
}

fn sampling_ordinal_roll(c: &mut criterion::Criterion) {
    let policy = Policy::create(Track::default(), Scale::default());
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("roll an ordinal policy at the start cell", |b| {
        b.iter(|| policy.roll(0, rng))
    });
}

fn sampling_parametric_roll(c: &mut criterion::Criterion) {
    let policy = Policy::create(Track::default(), Gaussian::default());
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("roll a parametric policy at the start cell", |b| {
        b.iter(|| policy.roll(0, rng))
    });
}

fn playing_ordinal_bulk_episodes(c: &mut criterion::Criterion) {
    let mut session = Session::new(config(Credit::Bulk, [Mover::Agent; 2]), Scale::default())
        .expect("valid config");
    c.bench_function("play an ordinal episode with bulk credit", |b| {
        b.iter(|| session.play_episode().expect("no humans"))
    });
}

fn playing_parametric_bulk_episodes(c: &mut criterion::Criterion) {
    let mut session = Session::new(config(Credit::Bulk, [Mover::Agent; 2]), Gaussian::default())
        .expect("valid config");
    c.bench_function("play a parametric episode with bulk credit", |b| {
        b.iter(|| session.play_episode().expect("no humans"))
    });
}

fn playing_ordinal_sparse_episodes(c: &mut criterion::Criterion) {
    let config = config(Credit::Sparse, [Mover::Agent, Mover::Random]);
    let mut session = Session::new(config, Scale::default()).expect("valid config");
    c.bench_function("play an ordinal episode with sparse credit", |b| {
        b.iter(|| session.play_episode().expect("no humans"))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use steprace::*;
