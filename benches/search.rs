use connect4::board::Board;
use connect4::board::Seat;
use connect4::search::Minimax;
use connect4::search::score;

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
        scanning_midgame_winner,
        counting_midgame_runs,
        evaluating_midgame_heuristic,
        searching_opening_depth_4,
        searching_midgame_depth_4,
        searching_midgame_depth_6,
}

const MIDGAME: &str = "3344253221";

fn midgame() -> Board {
    Board::try_from(MIDGAME).unwrap_or_default()
}

fn scanning_midgame_winner(c: &mut criterion::Criterion) {
    let board = midgame();
    c.bench_function("scan a midgame Board for a winner", |b| {
        b.iter(|| board.winner())
    });
}

fn counting_midgame_runs(c: &mut criterion::Criterion) {
    let board = midgame();
    c.bench_function("count 3-runs on a midgame Board", |b| {
        b.iter(|| board.count_runs(Seat::One, 3))
    });
}

fn evaluating_midgame_heuristic(c: &mut criterion::Criterion) {
    let board = midgame();
    c.bench_function("evaluate a midgame Board", |b| {
        b.iter(|| score(&board, Seat::One))
    });
}

fn searching_opening_depth_4(c: &mut criterion::Criterion) {
    let board = Board::default();
    c.bench_function("search the empty Board at depth 4", |b| {
        let mut minimax = Minimax::seeded(4, 0);
        b.iter(|| minimax.best_move(&board, Seat::One))
    });
}

fn searching_midgame_depth_4(c: &mut criterion::Criterion) {
    let board = midgame();
    c.bench_function("search a midgame Board at depth 4", |b| {
        let mut minimax = Minimax::seeded(4, 0);
        b.iter(|| minimax.best_move(&board, Seat::One))
    });
}

fn searching_midgame_depth_6(c: &mut criterion::Criterion) {
    let board = midgame();
    c.bench_function("search a midgame Board at depth 6", |b| {
        let mut minimax = Minimax::seeded(6, 0);
        b.iter(|| minimax.best_move(&board, Seat::One))
    });
}
