//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a keybox command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Colors off and no inherited `KEYBOX_*` variables
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("keybox").expect("failed to find keybox binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEYBOX_DIR");
        cmd.env_remove("KEYBOX_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Same environment as [`Test::cmd`], as a plain std command for spawning.
    pub fn std_cmd(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_keybox"));
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("KEYBOX_DIR");
        cmd.env_remove("KEYBOX_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `keybox init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run keybox init")
    }

    /// Shortcut for `keybox new` with a small key so tests stay fast.
    pub fn new_key(&self, name: &str) -> Output {
        self.cmd()
            .args(["new", name, "--bits", "1024"])
            .output()
            .expect("failed to run keybox new")
    }

    /// Shortcut for `keybox list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run keybox list")
    }

    /// Shortcut for `keybox list --json`, parsed.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run keybox list --json");
        assert!(
            output.status.success(),
            "list --json failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("list --json is not JSON")
    }

    /// Shortcut for `keybox pubkey`.
    pub fn pubkey(&self, name: &str) -> Output {
        self.cmd()
            .args(["pubkey", name])
            .output()
            .expect("failed to run keybox pubkey")
    }

    /// Shortcut for `keybox import <scope> --file <path>`.
    pub fn import_file(&self, scope: &str, path: &str) -> Output {
        self.cmd()
            .args(["import", scope, "--file", path])
            .output()
            .expect("failed to run keybox import")
    }

    /// Shortcut for `keybox import <scope> --name <name>` fed from stdin.
    pub fn import_stdin(&self, scope: &str, name: &str, pem: &str) -> Output {
        self.cmd()
            .args(["import", scope, "--name", name])
            .write_stdin(pem)
            .output()
            .expect("failed to run keybox import")
    }

    /// Shortcut for `keybox rename`.
    pub fn rename(&self, scope: &str, old: &str, new: &str) -> Output {
        self.cmd()
            .args(["rename", scope, old, new])
            .output()
            .expect("failed to run keybox rename")
    }

    /// Shortcut for `keybox rm --force`.
    pub fn rm(&self, scope: &str, name: &str) -> Output {
        self.cmd()
            .args(["rm", scope, name, "--force"])
            .output()
            .expect("failed to run keybox rm")
    }

    /// Shortcut for `keybox encrypt --to <public> <text>`.
    pub fn encrypt_to(&self, public: &str, text: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--to", public, text])
            .output()
            .expect("failed to run keybox encrypt")
    }

    /// Shortcut for `keybox encrypt --me <private> <text>`.
    pub fn encrypt_me(&self, private: &str, text: &str) -> Output {
        self.cmd()
            .args(["encrypt", "--me", private, text])
            .output()
            .expect("failed to run keybox encrypt")
    }

    /// Shortcut for `keybox decrypt --key <private>` fed from stdin.
    pub fn decrypt(&self, private: &str, ciphertext: &str) -> Output {
        self.cmd()
            .args(["decrypt", "--key", private])
            .write_stdin(ciphertext)
            .output()
            .expect("failed to run keybox decrypt")
    }

    /// Export a private key's public half into the public namespace.
    pub fn share(&self, private: &str, public: &str) -> Output {
        let output = self.pubkey(private);
        assert!(output.status.success(), "pubkey failed");
        self.import_stdin("public", public, &String::from_utf8_lossy(&output.stdout))
    }
}
