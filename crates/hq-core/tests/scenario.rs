//! End-to-end games driven by scripted dice.

use hq_core::combat::{CombatOutcome, DamagePolicy, Role};
use hq_core::dungeon::{Grid, Position, Tile};
use hq_core::{
    Command, Direction, ExplorationState, GameConfig, GameRng, MSG_DIED,
    MSG_KILLED_BY_MONSTER, MSG_MONSTER_DEFEATED, MSG_PRESS_ROLL, MSG_TREASURE, MoveOutcome, Phase,
    ScriptedRng, Session, TileEvent, TurnResult,
};

// The fixed board from the tabletop version
const BOARD: [&str; 10] = [
    "##########",
    "#S..M...T#",
    "#..##..#.#",
    "#..#.....#",
    "#..####..#",
    "#.....#..#",
    "###M###..#",
    "#T....X..#",
    "#........#",
    "##########",
];

fn fixed_board(config: GameConfig) -> ExplorationState {
    ExplorationState::from_grid(config, Grid::from_rows(&BOARD).unwrap()).unwrap()
}

/// Script for the movement die showing `n`
fn roll(n: u32) -> ScriptedRng {
    ScriptedRng::new(vec![n - 1])
}

#[test]
fn test_generated_board_roll_four_and_fight() {
    // 8 jitter draws and 5 corridor draws all zero, then monster at free
    // floor index 4 and trap at index 0
    let mut board_rng = ScriptedRng::new(vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0]);
    let mut state = ExplorationState::new(GameConfig::default(), &mut board_rng).unwrap();
    assert_eq!(board_rng.consumed(), 15);

    let grid = state.grid();
    assert_eq!(state.hero_position(), Position::new(4, 4));
    assert_eq!(grid.get(Position::new(4, 0)), Some(Tile::Monster));
    assert_eq!(grid.get(Position::new(0, 0)), Some(Tile::Trap));
    assert_eq!(grid.get(Position::new(9, 9)), Some(Tile::Treasure));
    assert_eq!(state.message(), MSG_PRESS_ROLL);

    assert!(state.roll_movement(&mut roll(4)));
    assert_eq!(state.move_points(), 4);
    assert_eq!(state.message(), "Move 4 steps");

    let mut quiet = GameRng::new(0);
    for y in [3, 2, 1] {
        let outcome = state.attempt_move(Direction::Up, &mut quiet);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                to: Position::new(4, y),
                event: None,
            }
        );
    }

    // Hero: 2 hits vs 1 block, monster: 2 hits vs 1 block, hero: 2 hits vs none
    let mut combat_rng = ScriptedRng::new(vec![0, 0, 5, 0, 0, 0, 0, 5, 0, 0, 0, 0]);
    let outcome = state.attempt_move(Direction::Up, &mut combat_rng);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            to: Position::new(4, 0),
            event: Some(TileEvent::Encounter(CombatOutcome::HeroWins)),
        }
    );
    assert_eq!(combat_rng.consumed(), 12);

    let combat = state.last_combat().unwrap();
    assert_eq!(combat.location, Position::new(4, 0));
    let damages: Vec<_> = combat.rounds.iter().map(|r| (r.attacker, r.damage)).collect();
    assert_eq!(damages, vec![(Role::Hero, 1), (Role::Monster, 1), (Role::Hero, 2)]);

    assert_eq!(state.hero().hit_points, 2);
    assert_eq!(state.message(), MSG_MONSTER_DEFEATED);
    assert_eq!(state.grid().get(Position::new(4, 0)), Some(Tile::Floor));
    assert_eq!(state.move_points(), 0);
    assert_eq!(state.phase(), Phase::AwaitingRoll);
}

#[test]
fn test_walls_and_edges_block() {
    let mut state = fixed_board(GameConfig::default());
    state.roll_movement(&mut roll(3));

    let mut rng = GameRng::new(5);
    assert_eq!(state.attempt_move(Direction::Up, &mut rng), MoveOutcome::Blocked);
    assert_eq!(state.attempt_move(Direction::Left, &mut rng), MoveOutcome::Blocked);
    assert_eq!(state.hero_position(), Position::new(1, 1));
    assert_eq!(state.move_points(), 3);

    // Down twice and right once; the wall at (3, 3) is next
    state.attempt_move(Direction::Down, &mut rng);
    state.attempt_move(Direction::Down, &mut rng);
    state.attempt_move(Direction::Right, &mut rng);
    assert_eq!(state.hero_position(), Position::new(2, 3));
    assert_eq!(state.phase(), Phase::AwaitingRoll);

    state.roll_movement(&mut roll(1));
    assert_eq!(state.attempt_move(Direction::Right, &mut rng), MoveOutcome::Blocked);
    assert_eq!(state.move_points(), 1);
}

#[test]
fn test_clamped_damage_on_fixed_board() {
    let config = GameConfig {
        damage_policy: DamagePolicy::ClampToOne,
        ..GameConfig::default()
    };
    let mut state = fixed_board(config);
    state.roll_movement(&mut roll(3));
    let mut quiet = GameRng::new(0);
    state.attempt_move(Direction::Right, &mut quiet);
    state.attempt_move(Direction::Right, &mut quiet);

    // All swords: every blow lands exactly one point
    let outcome = state.attempt_move(Direction::Right, &mut ScriptedRng::new(vec![0]));
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            to: Position::new(4, 1),
            event: Some(TileEvent::Encounter(CombatOutcome::HeroWins)),
        }
    );
    let combat = state.last_combat().unwrap();
    assert_eq!(combat.rounds.len(), 5);
    assert!(combat.rounds.iter().all(|r| r.damage == 1));
    assert_eq!(state.hero().hit_points, 1);
}

#[test]
fn test_death_then_reset() {
    let mut state = fixed_board(GameConfig::default());
    state.roll_movement(&mut roll(5));
    let mut quiet = GameRng::new(0);
    state.attempt_move(Direction::Right, &mut quiet);
    state.attempt_move(Direction::Right, &mut quiet);

    // Hero rolls only shields, monster only swords, hero defends with swords
    let script = vec![5, 5, 0, 0, 0, 0, 0, 0];
    let outcome = state.attempt_move(Direction::Right, &mut ScriptedRng::new(script));
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            to: Position::new(4, 1),
            event: Some(TileEvent::Encounter(CombatOutcome::HeroDefeated)),
        }
    );
    assert_eq!(state.message(), MSG_DIED);
    assert_ne!(state.message(), MSG_KILLED_BY_MONSTER);
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.move_points(), 0);
    assert_eq!(state.grid().get(Position::new(4, 1)), Some(Tile::Monster));
    assert_eq!(state.hero().hit_points, -1);
    assert_eq!(state.last_combat().map(|c| c.rounds.len()), Some(4));

    assert!(!state.roll_movement(&mut roll(2)));
    assert_eq!(state.attempt_move(Direction::Down, &mut quiet), MoveOutcome::NotMoving);

    state.reset(&mut GameRng::new(77)).unwrap();
    assert_eq!(state.phase(), Phase::AwaitingRoll);
    assert_eq!(state.hero().hit_points, 3);
    assert_eq!(state.grid().width(), 10);
    assert_eq!(state.hero_position(), Position::new(1, 1));
    assert_eq!(state.grid().get(Position::new(4, 1)), Some(Tile::Monster));
    assert_eq!(state.grid().count(Tile::Trap), 2);
    assert!(state.last_combat().is_none());
}

#[test]
fn test_treasure_keeps_game_running() {
    let grid = Grid::from_rows(&["########", "#S..X..#", "#......#", "########"]).unwrap();
    let mut state = ExplorationState::from_grid(GameConfig::default(), grid).unwrap();
    state.roll_movement(&mut roll(6));

    let mut quiet = GameRng::new(0);
    state.attempt_move(Direction::Right, &mut quiet);
    state.attempt_move(Direction::Right, &mut quiet);
    let outcome = state.attempt_move(Direction::Right, &mut quiet);
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            to: Position::new(4, 1),
            event: Some(TileEvent::Treasure),
        }
    );
    assert_eq!(state.message(), MSG_TREASURE);
    assert!(state.is_running());
    assert_eq!(state.phase(), Phase::Moving);
    assert_eq!(state.grid().count(Tile::Treasure), 0);

    assert!(state.attempt_move(Direction::Right, &mut quiet).moved());
    assert_eq!(state.move_points(), 2);
}

#[test]
fn test_session_ticks() {
    let mut session = Session::new_game(GameConfig::default(), Some(2024)).unwrap();
    assert_eq!(session.state().phase(), Phase::AwaitingRoll);

    let TurnResult::Rolled(points) = session.tick(Command::Roll).unwrap() else {
        panic!("first roll must succeed");
    };
    let mut moved = 0;
    for dir in [Direction::Up, Direction::Right, Direction::Down, Direction::Left].iter().cycle().take(64) {
        if session.state().phase() != Phase::Moving {
            break;
        }
        if let TurnResult::Moved(outcome) = session.tick(Command::Move(*dir)).unwrap()
            && outcome.moved()
        {
            moved += 1;
        }
    }
    assert!(moved <= points);
    assert_eq!(session.state().move_points(), 0);

    assert_eq!(session.tick(Command::Reset).unwrap(), TurnResult::Reset);
    assert_eq!(session.state().phase(), Phase::AwaitingRoll);
}
