// ABOUTME: Fixed values and defaults for the Trakt import lists
// ABOUTME: Property names used in validation results and form tables

/// Root of the Trakt API; never user-settable
pub const TRAKT_API_URL: &str = "https://api.trakt.tv";

pub const DEFAULT_RATING: &str = "0-100";
pub const DEFAULT_CERTIFICATION: &str = "NR,G,PG,PG-13,R,NC-17";
pub const DEFAULT_LIMIT: i32 = 100;

/// Value of the sign-in field that tells the UI to start the OAuth flow
pub const SIGN_IN_ACTION: &str = "startOAuth";

// Property names
pub const LINK: &str = "link";
pub const ACCESS_TOKEN: &str = "accessToken";
pub const REFRESH_TOKEN: &str = "refreshToken";
pub const EXPIRES: &str = "expires";
pub const AUTH_USER: &str = "authUser";
pub const RATING: &str = "rating";
pub const CERTIFICATION: &str = "certification";
pub const GENRES: &str = "genres";
pub const YEARS: &str = "years";
pub const LIMIT: &str = "limit";
pub const ADDITIONAL_PARAMETERS: &str = "traktAdditionalParameters";
pub const SIGN_IN: &str = "signIn";
pub const USERNAME: &str = "username";
pub const LISTNAME: &str = "listname";
pub const TRAKT_LIST_TYPE: &str = "traktListType";
