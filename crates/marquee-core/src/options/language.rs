define_options!(
    /// Original language of a movie.
    Language, "language" {
        English => "English",
        Hindi => "Hindi",
        Marathi => "Marathi",
        Gujarati => "Gujarati",
        Bengali => "Bengali",
        German => "German",
        French => "French",
        Spanish => "Spanish",
        Japanese => "Japanese",
        Korean => "Korean",
        Chinese => "Chinese",
        Russian => "Russian",
        Tamil => "Tamil",
        Telugu => "Telugu",
    }
);
