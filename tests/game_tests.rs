use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_fleet, Cell, Game, GameError, GameMode, GamePhase, Orientation, Ship, ShotOutcome,
    BOT_PLAYER_ID,
};

const HOST: u32 = 11;
const GUEST: u32 = 22;

/// A deliberately tiny "fleet" for deterministic scenarios; the board
/// trusts the caller on composition.
fn tiny_fleet() -> Vec<Ship> {
    vec![
        Ship::new(Cell::new(0, 0), Orientation::Horizontal, 4),
        Ship::new(Cell::new(5, 5), Orientation::Horizontal, 1),
    ]
}

fn started_game() -> Game {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    game.place_fleet_for(HOST, tiny_fleet()).unwrap();
    game.place_fleet_for(GUEST, tiny_fleet()).unwrap();
    game
}

#[test]
fn two_players_at_most() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    assert_eq!(game.add_player(33).unwrap_err(), GameError::GameFull);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    assert_eq!(game.add_player(HOST).unwrap_err(), GameError::DuplicatePlayer);
}

#[test]
fn the_first_player_holds_the_opening_turn() {
    let mut game = Game::new(1);
    assert_eq!(game.current_player(), None);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    assert_eq!(game.current_player(), Some(HOST));
}

#[test]
fn phase_flips_once_both_fleets_are_in() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    assert_eq!(game.phase(), GamePhase::AwaitingFleets);
    assert!(!game.is_ready_to_start());

    game.place_fleet_for(HOST, tiny_fleet()).unwrap();
    assert_eq!(game.phase(), GamePhase::AwaitingFleets);

    game.place_fleet_for(GUEST, tiny_fleet()).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.is_ready_to_start());
}

#[test]
fn attacks_before_the_start_are_rejected() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    game.place_fleet_for(HOST, tiny_fleet()).unwrap();

    assert_eq!(
        game.attack(HOST, Cell::new(0, 0)).unwrap_err(),
        GameError::NotStarted
    );
}

#[test]
fn unknown_players_are_reported_not_crashed() {
    let mut game = started_game();
    assert_eq!(
        game.attack(99, Cell::new(0, 0)).unwrap_err(),
        GameError::PlayerNotFound
    );
    assert_eq!(game.place_fleet_for(99, tiny_fleet()).unwrap_err(), GameError::PlayerNotFound);
    assert_eq!(game.opponent_of(99).unwrap_err(), GameError::PlayerNotFound);
}

#[test]
fn out_of_turn_attacks_change_nothing() {
    let mut game = started_game();
    assert_eq!(
        game.attack(GUEST, Cell::new(9, 9)).unwrap_err(),
        GameError::NotYourTurn
    );
    assert_eq!(game.current_player(), Some(HOST));

    // the cell is still fresh for the rightful attacker
    let report = game.attack(HOST, Cell::new(9, 9)).unwrap();
    assert!(report.outcome.switches_turn());
}

#[test]
fn the_turn_passes_only_on_a_first_time_miss() {
    let mut game = started_game();

    // host wounds the long ship and keeps the turn
    let report = game.attack(HOST, Cell::new(0, 0)).unwrap();
    assert!(matches!(report.outcome, ShotOutcome::Hit { .. }));
    assert_eq!(report.turn, HOST);
    assert_eq!(game.current_player(), Some(HOST));

    // a miss hands it over
    let report = game.attack(HOST, Cell::new(9, 9)).unwrap();
    assert_eq!(report.turn, GUEST);
    assert_eq!(game.current_player(), Some(GUEST));

    // guest misses back, host repeats the already-revealed cell and does
    // not lose the turn for it
    let report = game.attack(GUEST, Cell::new(9, 9)).unwrap();
    assert_eq!(report.turn, HOST);
    let report = game.attack(HOST, Cell::new(9, 9)).unwrap();
    assert!(!report.outcome.switches_turn());
    assert_eq!(report.turn, HOST);
    assert_eq!(game.current_player(), Some(HOST));
}

#[test]
fn a_kill_reports_the_cascade_as_synthetic_misses() {
    let mut game = started_game();

    for x in 0..3 {
        let report = game.attack(HOST, Cell::new(x, 0)).unwrap();
        assert!(matches!(report.outcome, ShotOutcome::Hit { .. }));
        assert!(report.cascade_misses.is_empty());
    }
    let report = game.attack(HOST, Cell::new(3, 0)).unwrap();
    match &report.outcome {
        ShotOutcome::Sunk { ship, cleared, .. } => {
            assert_eq!(ship.len(), 4);
            assert_eq!(cleared.len(), 6);
            assert_eq!(&report.cascade_misses, cleared);
        }
        other => panic!("expected a sink, got {:?}", other),
    }
    // a kill never hands the turn over
    assert_eq!(report.turn, HOST);
    assert_eq!(report.winner, None);
}

#[test]
fn sinking_the_last_ship_finishes_the_game() {
    let mut game = started_game();

    for x in 0..4 {
        game.attack(HOST, Cell::new(x, 0)).unwrap();
    }
    let report = game.attack(HOST, Cell::new(5, 5)).unwrap();
    assert_eq!(report.winner, Some(HOST));
    assert!(report.game_over());
    assert!(game.is_over());
    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.winner(), Some(HOST));
    assert_eq!(game.remaining_ships_of(GUEST).unwrap(), 0);

    // terminal: no further commands are accepted
    assert_eq!(
        game.attack(HOST, Cell::new(0, 1)).unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(
        game.random_attack(GUEST, &mut SmallRng::seed_from_u64(0))
            .unwrap_err(),
        GameError::GameOver
    );
}

#[test]
fn a_leaving_player_forfeits() {
    let mut game = started_game();
    let winner = game.player_left(HOST).unwrap();
    assert_eq!(winner, Some(GUEST));
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(GUEST));

    // leaving a finished game does not rewrite the result
    assert_eq!(game.player_left(GUEST).unwrap(), Some(GUEST));
}

#[test]
fn opponent_lookup_needs_both_seats() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    assert_eq!(game.opponent_of(HOST).unwrap_err(), GameError::PlayerNotFound);

    game.add_player(GUEST).unwrap();
    assert_eq!(game.opponent_of(HOST).unwrap(), GUEST);
    assert_eq!(game.opponent_of(GUEST).unwrap(), HOST);
}

#[test]
fn registered_fleets_are_returned_as_sent() {
    let mut game = Game::new(1);
    game.add_player(HOST).unwrap();
    game.add_player(GUEST).unwrap();
    let fleet = tiny_fleet();
    game.place_fleet_for(HOST, fleet.clone()).unwrap();
    assert_eq!(game.fleet_of(HOST).unwrap(), fleet.as_slice());
    assert!(game.fleet_of(GUEST).unwrap().is_empty());
}

#[test]
fn single_play_games_come_with_a_bot_seat() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut game = Game::single_play(5, &mut rng);
    assert_eq!(game.mode(), GameMode::SinglePlay);
    assert_eq!(game.players().collect::<Vec<_>>(), vec![BOT_PLAYER_ID]);
    // the bot never takes the opening turn
    assert_eq!(game.current_player(), None);

    game.add_player(HOST).unwrap();
    assert_eq!(game.current_player(), Some(HOST));
    game.place_fleet_for(HOST, random_fleet(&mut rng)).unwrap();
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.opponent_of(HOST).unwrap(), BOT_PLAYER_ID);

    // the human opens against the bot's board
    let report = game.random_attack(HOST, &mut rng).unwrap();
    assert_eq!(report.attacker, HOST);
}
