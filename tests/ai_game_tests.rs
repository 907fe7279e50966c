use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{resolve, AiPlayer, AttackOutcome, Board, HeuristicView, Player};

/// Fires one volley; returns the final outcome and the number of shots taken.
fn volley(player: &mut AiPlayer, rng: &mut SmallRng, target: &mut Board) -> (AttackOutcome, usize) {
    let mut shots = 0;
    loop {
        let view = HeuristicView::from(target.grid());
        let coord = player
            .select_target(rng, &view)
            .expect("fleet still afloat, a move must exist");
        let outcome = resolve(target, coord).unwrap();
        player.handle_attack_result(coord, outcome);
        shots += 1;
        if !matches!(outcome, AttackOutcome::Hit | AttackOutcome::HitAndDestroyed) {
            return (outcome, shots);
        }
    }
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let mut b1 = Board::new();
    let mut b2 = Board::new();
    p1.place_fleet(&mut rng, &mut b1).unwrap();
    p2.place_fleet(&mut rng, &mut b2).unwrap();

    let mut shots = [0usize; 2];
    let p1_won = loop {
        let (res, n) = volley(&mut p1, &mut rng, &mut b2);
        shots[0] += n;
        if res == AttackOutcome::HitAndWon {
            break true;
        }
        let (res, n) = volley(&mut p2, &mut rng, &mut b1);
        shots[1] += n;
        if res == AttackOutcome::HitAndWon {
            break false;
        }
        assert!(shots[0] < 100 && shots[1] < 100, "game took too many shots");
    };
    let loser = if p1_won { &b2 } else { &b1 };
    assert!(loser.all_destroyed());
}

#[test]
fn test_ai_never_repeats_a_shot() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut player = AiPlayer::new();
    let mut board = Board::new();
    player.place_fleet(&mut rng, &mut board).unwrap();

    let mut shots = 0;
    loop {
        let view = HeuristicView::from(board.grid());
        let Some(coord) = player.select_target(&mut rng, &view) else {
            break;
        };
        // resolve rejects anything already resolved
        let outcome = resolve(&mut board, coord).unwrap();
        shots += 1;
        if outcome == AttackOutcome::HitAndWon {
            break;
        }
    }
    assert!(board.all_destroyed());
    assert!(shots <= 100);
}
