//! Move generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use origins_engine::board::{BoardSetup, NeutralMarkers};
use origins_engine::core::{SessionConfig, Square};
use origins_engine::game::{GameSession, TurnController};
use origins_engine::nn::ZeroOracle;
use origins_engine::rules::MoveGenerator;

fn bench_legal_moves(c: &mut Criterion) {
    let setup = BoardSetup::standard().unwrap();
    let board = setup.board();
    let markers = NeutralMarkers::for_board(board);

    c.bench_function("legal_moves_opening_fire", |b| {
        b.iter(|| MoveGenerator::legal_moves(board, &markers, black_box(Square::new(2, 0))))
    });

    let mut open = BoardSetup::new();
    open.place("earth", 4, 4).unwrap();
    let open_markers = NeutralMarkers::unmarked();
    c.bench_function("legal_moves_open_board", |b| {
        b.iter(|| MoveGenerator::legal_moves(open.board(), &open_markers, black_box(Square::new(4, 4))))
    });
}

fn bench_ai_turn(c: &mut Criterion) {
    c.bench_function("ai_turn_opening", |b| {
        b.iter(|| {
            let session = GameSession::new(SessionConfig::headless()).unwrap();
            let mut game = TurnController::new(session, ZeroOracle);
            game.apply_human_move(Square::new(4, 0), Square::new(4, 1)).unwrap();
            black_box(game.run_ai_turn().unwrap())
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_ai_turn);
criterion_main!(benches);
