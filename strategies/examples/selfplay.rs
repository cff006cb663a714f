/// Plays one full game, greedy (Black) against positional (White), and
/// narrates the result.
use othello::{GameState, Player, Status};
use othello_strategies::{GreedyStrategy, PositionalStrategy, Strategy};

fn main() {
    let mut black = GreedyStrategy::new();
    let mut white = PositionalStrategy::new();
    let mut state = GameState::new();

    println!(
        "=== {} (Black) vs {} (White) ===\n",
        black.name(),
        white.name()
    );

    while let Status::ToMove(player) = state.status() {
        let strategy: &mut dyn Strategy = match player {
            Player::Black => &mut black,
            Player::White => &mut white,
        };

        let mv = strategy.select_move(state.board(), player);
        let turn = state.turn_count();
        let flipped = state.play(mv).expect("strategy moves are legal");
        println!("turn {:2}: {:?} plays {} (flips {})", turn, player, mv, flipped);
    }

    println!("\nFinal position:\n{}", state.board());
    let black_score = state.count_stones(Player::Black);
    let white_score = state.count_stones(Player::White);
    println!("Score: Black {} - White {}", black_score, white_score);
    match state.winner() {
        Some(winner) => println!("Winner: {:?}", winner),
        None => println!("Draw"),
    }
}
