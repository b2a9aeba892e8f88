//! List query options passed to repositories
//!
//! Sort fields are closed enums so that persistence code maps them onto a fixed
//! column whitelist instead of ever interpolating user input.

use uuid::Uuid;

use crate::value_objects::PageRequest;

macro_rules! sort_field {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $param:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            CreatedAt,
            $($variant),+
        }

        impl $name {
            /// Parse the camelCase query parameter value
            pub fn from_param(value: &str) -> Option<Self> {
                match value {
                    "createdAt" => Some(Self::CreatedAt),
                    $($param => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn as_param(self) -> &'static str {
                match self {
                    Self::CreatedAt => "createdAt",
                    $(Self::$variant => $param,)+
                }
            }
        }
    };
}

sort_field! {
    /// Sortable blog columns
    BlogSortField {
        Name => "name",
        Description => "description",
        WebsiteUrl => "websiteUrl",
        IsMembership => "isMembership",
    }
}

sort_field! {
    /// Sortable post columns
    PostSortField {
        Title => "title",
        ShortDescription => "shortDescription",
        Content => "content",
        BlogId => "blogId",
        BlogName => "blogName",
    }
}

sort_field! {
    /// Sortable comment columns
    CommentSortField {
        Content => "content",
    }
}

/// Blog list options
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    /// Case-insensitive substring match on the name
    pub search_name_term: Option<String>,
    pub sort_by: BlogSortField,
    pub page: PageRequest,
}

/// Post list options
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Restrict to one blog
    pub blog_id: Option<Uuid>,
    /// Case-insensitive substring match on the title
    pub search_title_term: Option<String>,
    pub sort_by: PostSortField,
    pub page: PageRequest,
}

/// Comment list options. Comments are always listed per post.
#[derive(Debug, Clone)]
pub struct CommentQuery {
    pub post_id: Uuid,
    pub sort_by: CommentSortField,
    pub page: PageRequest,
}

impl CommentQuery {
    pub fn for_post(post_id: Uuid) -> Self {
        Self {
            post_id,
            sort_by: CommentSortField::default(),
            page: PageRequest::default(),
        }
    }
}
