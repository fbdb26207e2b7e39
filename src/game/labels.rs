pub const COMPLETION_TITLE: &str = "Game Over";

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

pub fn time_label(seconds: u32) -> String {
    format!("Time: {seconds}s")
}

pub fn completion_message(seconds: u32) -> String {
    format!("Congratulations! You completed the game in {seconds} seconds.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_text() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(8), "Score: 8");
        assert_eq!(time_label(0), "Time: 0s");
        assert_eq!(time_label(125), "Time: 125s");
    }

    #[test]
    fn completion_text() {
        assert_eq!(
            completion_message(37),
            "Congratulations! You completed the game in 37 seconds."
        );
    }
}
