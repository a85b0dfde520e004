use kems_cli::run;

use once_cell::sync::Lazy;
use std::sync::Mutex;

static ENV_GUARD: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        unsafe {
            if let Some(prev) = &self.previous {
                std::env::set_var(self.key, prev);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }
}

fn cleared() -> [TempEnvVar; 6] {
    [
        TempEnvVar::unset("KEMS_CONFIG"),
        TempEnvVar::unset("KEMS_SEED"),
        TempEnvVar::unset("KEMS_AI"),
        TempEnvVar::unset("KEMS_AI_TURN_MS"),
        TempEnvVar::unset("KEMS_SWAP_MS"),
        TempEnvVar::unset("KEMS_REVEAL_MS"),
    ]
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut argv = vec!["kems"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "deal", "sim", "stats", "cfg", "rules"] {
        assert!(
            stdout.contains(cmd),
            "help should list subcommand `{}`",
            cmd
        );
    }
}

#[test]
fn unknown_flag_exits_2() {
    let (code, _, stderr) = run_cli(&["deal", "--turbo"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: kems"));
}

#[test]
fn deal_is_reproducible_by_seed() {
    let (c1, a, _) = run_cli(&["deal", "--seed", "2024"]);
    let (c2, b, _) = run_cli(&["deal", "--seed", "2024"]);
    let (_, other, _) = run_cli(&["deal", "--seed", "2025"]);
    assert_eq!((c1, c2), (0, 0));
    assert_eq!(a, b);
    assert_ne!(a, other);
    assert!(a.contains("Deck: 40"));
}

#[test]
fn rules_prints_about_and_how_to_play() {
    let (code, stdout, _) = run_cli(&["rules"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Match 4 cards of the same rank to win!"));
    assert!(stdout.contains("Get 4 matching cards to win!"));
}

#[test]
fn cfg_shows_default_settings() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = cleared();

    let (code, stdout, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
    assert_eq!(json["ai_turn_delay_ms"]["value"].as_u64(), Some(500));
    assert_eq!(json["swap_delay_ms"]["value"].as_u64(), Some(400));
    assert_eq!(json["reveal_delay_ms"]["value"].as_u64(), Some(2000));
    for key in ["seed", "ai", "ai_turn_delay_ms", "swap_delay_ms", "reveal_delay_ms"] {
        assert_eq!(json[key]["source"].as_str(), Some("default"), "{key}");
    }
}

#[test]
fn cfg_env_overrides_file() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = cleared();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kems.toml");
    std::fs::write(&path, "seed = 11\nai_turn_delay_ms = 250\n").unwrap();
    let _file = TempEnvVar::set("KEMS_CONFIG", &path.to_string_lossy());
    let _seed = TempEnvVar::set("KEMS_SEED", "12");

    let (code, stdout, _) = run_cli(&["cfg"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["seed"]["value"].as_u64(), Some(12));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["ai_turn_delay_ms"]["value"].as_u64(), Some(250));
    assert_eq!(json["ai_turn_delay_ms"]["source"].as_str(), Some("file"));
}

#[test]
fn cfg_invalid_configuration_exits_2() {
    let _env = ENV_GUARD.lock().unwrap();
    let _cleared = cleared();
    let _ai = TempEnvVar::set("KEMS_AI", "oracle");

    let (code, stdout, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("oracle"), "stderr: {}", stderr);
}

#[test]
fn sim_then_stats_agree() {
    let _env = ENV_GUARD.lock().unwrap();
    let _break = TempEnvVar::unset("KEMS_SIM_BREAK_AFTER");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("sim.jsonl");
    let path_str = path.to_string_lossy().into_owned();

    let (code, sim_out, stderr) = run_cli(&[
        "sim", "--games", "12", "--seed", "31", "--output", path_str.as_str(),
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    let sim_json: serde_json::Value =
        serde_json::from_str(&sim_out[sim_out.find('{').unwrap()..]).unwrap();

    let (code, stats_out, _) = run_cli(&["stats", "--input", path_str.as_str()]);
    assert_eq!(code, 0);
    let stats_json: serde_json::Value = serde_json::from_str(&stats_out).unwrap();
    assert_eq!(sim_json, stats_json);
    assert_eq!(stats_json["games"].as_u64(), Some(12));
}

#[test]
fn sim_zero_games_exits_2() {
    let (code, _, stderr) = run_cli(&["sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("games must be >= 1"));
}

#[test]
fn sim_interrupted_exits_130() {
    let _env = ENV_GUARD.lock().unwrap();
    let _break = TempEnvVar::set("KEMS_SIM_BREAK_AFTER", "2");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.jsonl");
    let path_str = path.to_string_lossy().into_owned();
    let (code, _, stderr) = run_cli(&[
        "sim", "--games", "5", "--seed", "1", "--output", path_str.as_str(),
    ]);
    assert_eq!(code, 130);
    assert!(stderr.contains("Interrupted: saved 2/5"));
    let lines = std::fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(lines, 2);
}

#[test]
fn stats_missing_file_exits_2() {
    let (code, _, stderr) = run_cli(&["stats", "--input", "does/not/exist.jsonl"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Failed to read"));
}
