//! Blog posts

use crate::model::concrete_models;

concrete_models! {
    Blog;
    BlogPostModel: Base,
    BlogPostSummaryModel: Base,
    BlogPostRightsModel: Base,
    BlogAuthorDetailsModel: Base,
}
