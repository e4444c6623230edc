//! Navigation handlers: `up` and `cd`

use crate::{AppError, Session};

/// Move to the parent directory; a no-op at the filesystem root
pub async fn up(session: &mut Session) -> Result<(), AppError> {
    let parent = app_fs::resolve_directory(session.current_dir(), &[".."]).await?;
    session.set_current_dir(parent);
    Ok(())
}

/// Change to the directory named by `args`, joined with spaces
pub async fn cd(session: &mut Session, args: &[String]) -> Result<(), AppError> {
    if args.is_empty() {
        return Err(AppError::invalid_input("cd needs a path"));
    }

    let target = app_fs::resolve_directory(session.current_dir(), args).await?;
    session.set_current_dir(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::fs;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_cd_and_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        let mut session = Session::new("alice", dir.path()).unwrap();

        cd(&mut session, &args(&["docs"])).await.unwrap();
        assert_eq!(session.current_dir(), dir.path().join("docs"));

        up(&mut session).await.unwrap();
        assert_eq!(session.current_dir(), dir.path());
    }

    #[tokio::test]
    async fn test_cd_joins_split_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("my documents")).unwrap();
        let mut session = Session::new("alice", dir.path()).unwrap();

        cd(&mut session, &args(&["my", "documents"])).await.unwrap();
        assert_eq!(session.current_dir(), dir.path().join("my documents"));
    }

    #[tokio::test]
    async fn test_cd_failure_leaves_session() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.txt"), b"").unwrap();
        let mut session = Session::new("alice", dir.path()).unwrap();

        for bad in [args(&[]), args(&["missing"]), args(&["file.txt"])] {
            let err = cd(&mut session, &bad).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert_eq!(session.current_dir(), dir.path());
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_up_at_root() {
        let mut session = Session::new("alice", "/").unwrap();
        up(&mut session).await.unwrap();
        up(&mut session).await.unwrap();
        assert_eq!(session.current_dir(), std::path::Path::new("/"));
    }
}
