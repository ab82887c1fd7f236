use axum::response::{Html, IntoResponse};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Moodify</title>
    <meta name="description" content="Create personalized Spotify playlists based on your mood">
</head>
<body>
    <main>
        <h1>Moodify</h1>
        <p>Welcome to Moodify - Create personalized Spotify playlists based on your mood</p>
        <a href="/api/auth/spotify/login">Sign in with Spotify</a>
    </main>
</body>
</html>
"#;

pub async fn home_handler() -> impl IntoResponse {
    Html(HOME_PAGE)
}
