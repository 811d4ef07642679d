define_options!(
    /// Genre labels offered by the genre picker.
    Genre, "genre" {
        Action => "Action",
        Adventure => "Adventure",
        Animation => "Animation",
        Comedy => "Comedy",
        Crime => "Crime",
        Documentary => "Documentary",
        Drama => "Drama",
        Family => "Family",
        Fantasy => "Fantasy",
        History => "History",
        Horror => "Horror",
        Music => "Music",
        Mystery => "Mystery",
        Romance => "Romance",
        SciFi => "Sci-Fi",
        Sport => "Sport",
        Thriller => "Thriller",
        War => "War",
        Western => "Western",
    }
);
