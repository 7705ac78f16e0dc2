use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::PlayedGame;

/// Writes every played game as a numbered JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

#[derive(Serialize)]
struct GameRecording<'a> {
    seed: u64,
    #[serde(flatten)]
    game: &'a PlayedGame,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Returns the path of the file that was written.
    pub fn write_game_recording(&mut self, seed: u64, game: &PlayedGame) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &GameRecording { seed, game })?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{play_game, Config};

    #[test]
    fn missing_directory() {
        let dir = std::env::temp_dir().join("sequence-recorder-does-not-exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = std::env::temp_dir().join(format!("sequence-recorder-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config {
            num_players: 2,
            max_turns: 4,
        };
        let game = play_game(&mut StdRng::seed_from_u64(8), &config).unwrap();

        let mut recorder = Recorder::new(dir.clone()).unwrap();
        let first = recorder.write_game_recording(8, &game).unwrap();
        let second = recorder.write_game_recording(8, &game).unwrap();
        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));

        let json: serde_json::Value =
            serde_json::from_reader(File::open(&first).unwrap()).unwrap();
        assert_eq!(json["seed"], 8);
        assert_eq!(json["num_players"], 2);
        assert_eq!(json["turns"].as_array().unwrap().len(), 4);
        assert_eq!(json["grid"][0][0], -1);
        assert_eq!(json["result"]["type"], "OutOfTurns");
        assert!(json["turns"][0]["card"].is_string());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
