use std::time::Duration;

use process::{Command, Error};

#[test_log::test(tokio::test)]
async fn test_command() {
    let cmd = Command::new("echo").arg("hello,").arg("world!");
    assert_eq!(cmd.to_string(), "echo hello, world!");

    let out = cmd.run().await.unwrap().to_string_lossy();
    assert_eq!(out, "hello, world!\n");
}

#[test_log::test(tokio::test)]
async fn test_command_args() {
    let cmd = Command::new("printf").args(["%s-%s", "a b", "c"]);
    assert_eq!(cmd.to_string(), "printf %s-%s a b c");

    let out = cmd.run().await.unwrap();
    assert_eq!(out.to_string_lossy(), "a b-c");
}

#[test_log::test(tokio::test)]
async fn test_command_not_found() {
    let err = Command::new("this-program-does-not-exist")
        .run()
        .await
        .unwrap_err();

    match err {
        Error::SpawnCommandError(err, cmd) => {
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            assert_eq!(cmd, "this-program-does-not-exist");
        }
        err => panic!("unexpected error: {err:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn test_command_non_zero() {
    let err = Command::new("sh")
        .args(["-c", "echo partial; echo 'No matches.' >&2; exit 1"])
        .run()
        .await
        .unwrap_err();

    match err {
        Error::GetExitStatusCodeNonZeroError(_, status, output) => {
            assert_eq!(status, 1);
            assert_eq!(output.to_string_lossy(), "partial\n");
            assert_eq!(output.stderr_lossy(), "No matches.\n");
            assert!(output.contains("No matches"));
        }
        err => panic!("unexpected error: {err:?}"),
    }
}

#[test_log::test(tokio::test)]
async fn test_command_timeout() {
    let err = Command::new("sleep")
        .arg("5")
        .with_timeout(Duration::from_millis(100))
        .run()
        .await
        .unwrap_err();

    match err {
        Error::TimeoutError(cmd, timeout) => {
            assert_eq!(cmd, "sleep 5");
            assert_eq!(timeout, Duration::from_millis(100));
        }
        err => panic!("unexpected error: {err:?}"),
    }
}
