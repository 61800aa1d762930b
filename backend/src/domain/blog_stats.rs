//! Pure aggregations over in-memory blog collections.
//!
//! Nothing here touches a store. Ties always resolve to the earliest entry in
//! input order so results are deterministic for a given slice.

use super::Blog;

/// An author paired with the number of blogs they wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: u64,
}

/// An author paired with the likes summed across their blogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// Sum of `likes` across `blogs`, saturating at `u64::MAX`; zero for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(Blog::likes).fold(0, u64::saturating_add)
}

/// First blog carrying the maximum like count.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best: Option<&Blog>, blog| match best {
        Some(current) if current.likes() >= blog.likes() => Some(current),
        _ => Some(blog),
    })
}

/// Author with the most blogs.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    max_by_author(blogs, |_| 1).map(|(author, blogs)| AuthorBlogCount { author, blogs })
}

/// Author whose blogs collected the most likes in total.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    max_by_author(blogs, Blog::likes).map(|(author, likes)| AuthorLikes { author, likes })
}

/// Group by author in first-seen order, then pick the first maximal group.
fn max_by_author(blogs: &[Blog], weight: impl Fn(&Blog) -> u64) -> Option<(String, u64)> {
    let mut groups: Vec<(&str, u64)> = Vec::new();
    for blog in blogs {
        match groups.iter_mut().find(|(author, _)| *author == blog.author()) {
            Some((_, total)) => *total = total.saturating_add(weight(blog)),
            None => groups.push((blog.author(), weight(blog))),
        }
    }

    groups
        .into_iter()
        .fold(None, |best: Option<(&str, u64)>, group| match best {
            Some(current) if current.1 >= group.1 => Some(current),
            _ => Some(group),
        })
        .map(|(author, total)| (author.to_owned(), total))
}
