//! Tests for CLI argument parsing.

use clap::Parser;

use super::cli::{Cli, Command, ResponseTypeArg};

mod parsing {
    use super::*;

    #[test]
    fn parse_post_with_global_options() {
        let cli = Cli::parse_from_iter([
            "slack-chat",
            "--token",
            "xoxb-1",
            "post",
            "--channel",
            "C1",
            "--text",
            "hello",
            "--verbose",
        ]);

        assert_eq!(cli.token.as_deref(), Some("xoxb-1"));
        assert!(cli.verbose);
        let Command::Post(args) = cli.command else {
            panic!("expected post");
        };
        assert_eq!(args.channel, "C1");
        assert_eq!(args.text, "hello");
        assert!(!args.no_escape);
        assert!(!args.as_user);
        assert!(args.thread_ts.is_none());
    }

    #[test]
    fn parse_post_flags() {
        let cli = Cli::parse_from_iter([
            "slack-chat",
            "post",
            "--channel",
            "C1",
            "--text",
            "<raw>",
            "--no-escape",
            "--as-user",
            "--thread-ts",
            "1.2",
            "--broadcast",
            "--attachments",
            r#"[{"text":"a"}]"#,
        ]);

        let Command::Post(args) = cli.command else {
            panic!("expected post");
        };
        assert!(args.no_escape);
        assert!(args.as_user);
        assert!(args.broadcast);
        assert_eq!(args.thread_ts.as_deref(), Some("1.2"));
        assert_eq!(args.attachments.as_deref(), Some(r#"[{"text":"a"}]"#));
    }

    #[test]
    fn parse_update_and_delete() {
        let update = Cli::parse_from_iter([
            "slack-chat", "update", "--channel", "C1", "--ts", "1.0", "--text", "new",
        ]);
        assert!(matches!(
            update.command,
            Command::Update { ref ts, .. } if ts == "1.0"
        ));

        let delete = Cli::parse_from_iter(["slack-chat", "delete", "--channel", "C1", "--ts", "1.0"]);
        assert!(matches!(delete.command, Command::Delete { .. }));
    }

    #[test]
    fn parse_respond_response_types() {
        let cli = Cli::parse_from_iter([
            "slack-chat",
            "respond",
            "--url",
            "https://hooks.slack.com/x",
            "--text",
            "done",
            "--response-type",
            "in_channel",
        ]);

        let Command::Respond { response_type, .. } = cli.command else {
            panic!("expected respond");
        };
        assert_eq!(response_type, Some(ResponseTypeArg::InChannel));
        assert_eq!(ResponseTypeArg::InChannel.as_str(), "in_channel");
        assert_eq!(ResponseTypeArg::Ephemeral.as_str(), "ephemeral");
    }

    #[test]
    fn parse_upload_channels_delimited() {
        let cli = Cli::parse_from_iter([
            "slack-chat",
            "upload",
            "--channels",
            "C1,C2",
            "--channels",
            "C3",
            "--file",
            "report.csv",
        ]);

        let Command::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        assert_eq!(args.channels, vec!["C1", "C2", "C3"]);
        assert_eq!(args.file.as_deref(), Some(std::path::Path::new("report.csv")));
    }

    #[test]
    fn upload_requires_a_source() {
        let result = Cli::try_parse_from(["slack-chat", "upload", "--channels", "C1"]);

        assert!(result.is_err());
    }

    #[test]
    fn upload_rejects_file_and_content_together() {
        let result = Cli::try_parse_from([
            "slack-chat",
            "upload",
            "--file",
            "a.txt",
            "--content",
            "x",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn init_has_default_output() {
        let cli = Cli::parse_from_iter(["slack-chat", "init"]);

        let Command::Init { output } = cli.command else {
            panic!("expected init");
        };
        assert_eq!(output, std::path::PathBuf::from("slack-chat.toml"));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["slack-chat", "--token", "x"]).is_err());
    }
}

mod cli_definition {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
