use rand::rngs::StdRng;
use rand::SeedableRng;
use tile_weave::prelude::*;
use tile_weave_examples::init_tracing;
use tracing::info;

/// Drives a scripted session against a freshly built standard map: walk a
/// short path, collect whatever lies underfoot, and print the wire-shaped
/// JSON snapshot a transport layer would send after each action.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(7);
    let mut session = GameSession::new("standard", Distribution::StartPeak, &mut rng)?;

    let script = [
        Action::Move {
            direction: Direction::Right,
        },
        Action::Collect,
        Action::Move {
            direction: Direction::Down,
        },
        Action::Collect,
        Action::Move {
            direction: Direction::Up,
        },
        Action::Move {
            direction: Direction::Up,
        },
        Action::Collect,
    ];

    for action in script {
        info!(?action, "applying");
        session.apply(action);

        let PlayerState { x, y } = session.player();
        info!(x, y, standing_on = %session.grid().get(x, y), "player state");
    }

    // The full snapshot is large; print the player's local view and the
    // payload the driving layer would serialize.
    for row in session.view(2) {
        println!("{}", row.join(" "));
    }

    let snapshot = session.snapshot();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "player": snapshot.player,
            "inventory": snapshot.inventory,
        }))?
    );

    Ok(())
}
