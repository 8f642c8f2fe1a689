use std::error::Error;

use playtime::domain::{Game, GameWithTime};
use playtime::MockPlayTimeSource;
use playtime_adjust::{AdjustTimePage, RowCorrectness};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let source = MockPlayTimeSource::new().with_games(vec![
        GameWithTime::new(Game::new("570", "Dota 2"), 9000),
        GameWithTime::new(Game::new("1245620", "Elden Ring"), 3600),
        GameWithTime::new(Game::new("504230", "Celeste"), 0),
    ]);

    let mut page = AdjustTimePage::load_with_defaults(source.clone()).await?;

    // Narrow the picker, select a game, correct its time
    page.set_search("elden");
    let options = page.game_options();
    println!("matches for \"elden\": {:?}", options);

    page.select_game(0, options[0].id.clone());
    println!(
        "tracked: {} (seeded {:.2}h)",
        page.tracked_time_display(0).unwrap_or_default(),
        page.rows()[0].desired_hours.unwrap_or_default()
    );

    page.set_desired_hours(0, "12.5");
    assert_eq!(page.row_correctness(0), Some(RowCorrectness::Correct));

    let outcome = page.commit().await?;
    for correction in &outcome.submitted {
        println!(
            "corrected {} to {}s",
            correction.game.name, correction.time_sec
        );
    }

    Ok(())
}
