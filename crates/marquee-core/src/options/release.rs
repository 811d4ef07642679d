define_options!(
    /// Visibility of a movie on the public site.
    Status, "status" {
        Public => "public",
        Private => "private",
    }
);

define_options!(
    /// Kind of production.
    MovieType, "type" {
        Film => "Film",
        ShortFilm => "Short Film",
        Documentary => "Documentary",
        TvShow => "TV Show",
        WebSeries => "Web Series",
    }
);
