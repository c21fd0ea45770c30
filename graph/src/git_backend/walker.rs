use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use git2::{Commit, Repository, Sort};
use tracing::debug;
use crate::core::CommitSummary;

/// Reads commit history windows out of a git repository
pub struct GitWalker {
    repo: Repository,
}

impl GitWalker {
    pub fn new(repo_path: Option<&str>) -> Result<Self> {
        let repo = match repo_path {
            Some(path) => Repository::open(path),
            None => Repository::open_from_env(),
        }
        .context("Failed to open repository")?;

        Ok(Self { repo })
    }

    /// List up to `limit` commits after skipping `offset`, newest first.
    ///
    /// Walks HEAD and every local branch. An empty repository (unborn HEAD)
    /// yields an empty list.
    pub fn list_commits(&self, limit: usize, offset: usize) -> Result<Vec<CommitSummary>> {
        let mut revwalk = self.repo.revwalk()?;

        let mut has_tips = false;
        if let Ok(head) = self.repo.head() {
            if let Some(target) = head.target() {
                revwalk.push(target)?;
                has_tips = true;
            }
        }
        for branch in self.repo.branches(Some(git2::BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(target) = branch.get().target() {
                revwalk.push(target)?;
                has_tips = true;
            }
        }
        if !has_tips {
            return Ok(Vec::new());
        }

        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk.skip(offset).take(limit) {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(self.commit_to_summary(&commit)?);
        }

        debug!(limit, offset, loaded = commits.len(), "listed commits");
        Ok(commits)
    }

    /// Convert a git2::Commit to CommitSummary
    fn commit_to_summary(&self, commit: &Commit) -> Result<CommitSummary> {
        let sha = commit.id().to_string();
        let parents: Vec<String> = commit.parent_ids().map(|oid| oid.to_string()).collect();

        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .context("Invalid commit timestamp")?;

        let author = commit.author().name().unwrap_or("Unknown").to_string();
        let message = commit.summary().unwrap_or("").to_string();

        Ok(CommitSummary::new(sha, parents, timestamp, author, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_commit_graph;
    use crate::layout::build_graph_layout;
    use git2::{Oid, Signature};
    use tempfile::TempDir;

    fn create_test_repo() -> Result<(TempDir, Repository)> {
        let dir = TempDir::new()?;
        let repo = Repository::init(dir.path())?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok((dir, repo))
    }

    fn commit_to_repo(
        repo: &Repository,
        message: &str,
        parents: &[&Commit],
        update_ref: Option<&str>,
    ) -> Result<Oid> {
        let sig = Signature::now("Test User", "test@example.com")?;
        let tree_id = {
            let mut index = repo.index()?;
            index.write_tree()?
        };
        let tree = repo.find_tree(tree_id)?;

        Ok(repo.commit(update_ref, &sig, &sig, message, &tree, parents)?)
    }

    fn open(dir: &TempDir) -> Result<GitWalker> {
        GitWalker::new(dir.path().to_str())
    }

    #[test]
    fn test_not_a_repository() -> Result<()> {
        let dir = TempDir::new()?;
        match open(&dir) {
            Ok(_) => panic!("plain directory opened as a repository"),
            Err(err) => assert_eq!(err.to_string(), "Failed to open repository"),
        }
        Ok(())
    }

    #[test]
    fn test_empty_repository() -> Result<()> {
        let (dir, _repo) = create_test_repo()?;
        let commits = open(&dir)?.list_commits(10, 0)?;
        assert!(commits.is_empty());
        Ok(())
    }

    #[test]
    fn test_linear_history() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let oid1 = commit_to_repo(&repo, "First commit", &[], Some("HEAD"))?;
        let commit1 = repo.find_commit(oid1)?;
        let oid2 = commit_to_repo(&repo, "Second commit", &[&commit1], Some("HEAD"))?;
        let commit2 = repo.find_commit(oid2)?;
        let oid3 = commit_to_repo(&repo, "Third commit", &[&commit2], Some("HEAD"))?;

        let commits = open(&dir)?.list_commits(10, 0)?;
        assert_eq!(commits.len(), 3);
        assert_eq!(commits[0].sha, oid3.to_string());
        assert_eq!(commits[0].message, "Third commit");
        assert_eq!(commits[0].author_name, "Test User");
        assert_eq!(commits[0].short_sha.len(), 7);
        assert_eq!(commits[2].parents.len(), 0);

        Ok(())
    }

    #[test]
    fn test_paginated_window() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let mut parent: Option<Oid> = None;
        for i in 0..5 {
            let parent_commit = parent.map(|oid| repo.find_commit(oid)).transpose()?;
            let parents: Vec<&Commit> = parent_commit.iter().collect();
            parent = Some(commit_to_repo(&repo, &format!("Commit {}", i), &parents, Some("HEAD"))?);
        }

        let window = open(&dir)?.list_commits(2, 1)?;
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].message, "Commit 3");
        assert_eq!(window[1].message, "Commit 2");

        // The oldest commit of the window points outside of it
        let data = build_graph_layout(parse_commit_graph(&window), 10.0);
        assert_eq!(data.node_count(), 2);
        assert_eq!(data.edge_count(), 1);

        Ok(())
    }

    #[test]
    fn test_merge_commit() -> Result<()> {
        let (dir, repo) = create_test_repo()?;

        let base_oid = commit_to_repo(&repo, "Base commit", &[], Some("HEAD"))?;
        let base_commit = repo.find_commit(base_oid)?;

        let branch1_oid = commit_to_repo(&repo, "Branch 1", &[&base_commit], Some("HEAD"))?;
        let branch1_commit = repo.find_commit(branch1_oid)?;

        let branch2_oid = commit_to_repo(&repo, "Branch 2", &[&base_commit], None)?;
        let branch2_commit = repo.find_commit(branch2_oid)?;

        let _merge_oid = commit_to_repo(&repo, "Merge", &[&branch1_commit, &branch2_commit], Some("HEAD"))?;

        let commits = open(&dir)?.list_commits(100, 0)?;
        let data = build_graph_layout(parse_commit_graph(&commits), 10.0);

        assert_eq!(data.node_count(), 4);
        assert_eq!(data.edge_count(), 4);
        assert_eq!(data.lanes, 2);

        let stats = data.stats();
        assert_eq!(stats.merge_commits, 1);
        assert_eq!(stats.root_commits, 1);

        Ok(())
    }
}
