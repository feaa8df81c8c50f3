//! Descriptions of holidays, keyed by their normalized name.

use super::HolidayDetails;

pub(super) const HOLIDAYS: &[HolidayDetails] = &[
    HolidayDetails {
        title: "Rosh Chodesh Sh'vat",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. The Hebrew month of Sh'vat is associated with the renewal of trees, as it contains the holiday of Tu BiShvat, the New Year for Trees.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Tu BiShvat",
        description: "The New Year for Trees, originally a date in ancient Israel for calculating tithes on fruit. Today it's marked by eating fruits native to Israel, planting trees, and reflecting on stewardship of the earth.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat Shirah",
        description: "A special Shabbat named for the Song at the Sea, sung by the Israelites after crossing the Red Sea, which is read in this week's Torah portion. Many communities add special melodies and focus on themes of gratitude and redemption.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Adar",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Adar is known as the month of joy, as it contains the festive holiday of Purim.",
        aliases: &["Rosh Chodesh Adar I", "Rosh Chodesh Adar II"],
    },
    HolidayDetails {
        title: "Purim Katan",
        description: "A 'minor Purim' observed in Adar I during Hebrew leap years, when a second month of Adar is added. Unlike the main Purim holiday, there are no specific ritual observances, but the day is often marked by extra joy and festive meals.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shushan Purim Katan",
        description: "The day after Purim Katan, observed in cities that were walled in ancient times (like Jerusalem). In the Purim story, the Jews in the walled city of Shushan defended themselves against their enemies for an extra day and celebrated later than those in unwalled areas. Similar to Purim Katan, it has no specific ritual observances but is marked by extra joy.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat Shekalim",
        description: "One of four special Shabbatot leading up to Pesach. An additional Torah reading recalls the half-shekel offering collected in Adar in ancient Israel to support the Temple's communal sacrifices.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Ta'anit Esther",
        description: "The Fast of Esther, observed on the day before Purim. It commemorates the fasting and prayer of the Jewish people before defending themselves from their enemies, as described in the Book of Esther, and sets a reflective tone before the celebration.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat Zachor",
        description: "One of four special Shabbatot leading up to Pesach. An additional Torah reading recalls the commandment to remember Amalek's attack on the Israelites and is traditionally read on the Shabbat before Purim.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Purim",
        description: "A joyful holiday celebrating the rescue of the Jewish people in ancient Persia from Haman, a royal advisor who plotted their destruction, as told in the biblical Book of Esther. Traditions include reading the Megillah (Book of Esther), dressing up in costumes, exchanging gifts of food, giving charity to the poor, and enjoying a festive meal.",
        aliases: &["Erev Purim"],
    },
    HolidayDetails {
        title: "Shushan Purim",
        description: "Purim observed a day later in cities that were walled in ancient times, like Jerusalem. In the Purim story, the Jews in the walled city of Shushan defended themselves against their enemies for an extra day and celebrated later than those in unwalled areas.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat Parah",
        description: "One of four special Shabbatot leading up to Pesach. An additional Torah reading describes the red heifer used for ritual purification in ancient Israel, spiritually preparing the community for Pesach.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat HaChodesh",
        description: "One of four special Shabbatot leading up to Pesach, observed on the Shabbat before Rosh Chodesh Nisan. An additional Torah reading describes God designating Nisan as the first month and commanding the Israelites to prepare for the first Passover and the Exodus from Egypt.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Nisan",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Nisan is the month of the Exodus and Pesach, emphasizing themes of renewal, redemption, and the arrival of spring.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Yom HaAliyah",
        description: "A modern Israeli observance recognizing aliyah (Jewish immigration to the Land of Israel) as a central part of Jewish history and identity. It celebrates stories of return, refuge, and rebuilding.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat HaGadol",
        description: "The Great Shabbat, observed on the Shabbat immediately before Pesach. Traditionally, rabbis give extended teachings on the laws and meaning of Pesach, preparing the community for the holiday.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Ta'anit Bechorot",
        description: "The Fast of the Firstborn, observed on the day before Pesach, commemorating the sparing of Israelite firstborn sons during the final plague in Egypt. Many firstborn sons attend a siyum (completion of Torah study) to conclude the fast.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Pesach",
        description: "Passover commemorates the Exodus from Egypt and the Israelites' journey from slavery to freedom. During the eight-day holiday, leavened bread (chametz) is avoided, symbolizing the haste of the Exodus. The centerpiece is the Seder, a ritual meal where the Exodus story is retold through prayers, songs, and symbolic foods like matzah and bitter herbs.",
        aliases: &[
            "Erev Pesach",
            "Pesach I",
            "Pesach II",
            "Pesach III",
            "Pesach III (CH''M)",
            "Pesach IV",
            "Pesach IV (CH''M)",
            "Pesach V",
            "Pesach V (CH''M)",
            "Pesach VI",
            "Pesach VI (CH''M)",
            "Pesach VII",
            "Pesach VIII",
        ],
    },
    HolidayDetails {
        title: "Yom HaShoah",
        description: "Holocaust Remembrance Day, dedicated to honoring the six million Jews murdered in the Holocaust and preserving survivor testimony. Many communities hold memorial ceremonies, readings of names, and educational programs.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Iyyar",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Iyyar falls between Pesach and Shavuot during the Omer counting period and contains Israel's memorial and independence days.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Yom HaZikaron",
        description: "Israel's Memorial Day for fallen soldiers and victims of terrorism. The day is observed with nationwide sirens that bring the country to a standstill, memorial ceremonies at military cemeteries, and moments of collective remembrance.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Yom HaAtzma'ut",
        description: "Israel's Independence Day, celebrating the founding of the modern State of Israel in 1948. The day is marked by festive gatherings, music, fireworks, and a national shift from the solemnity of Yom HaZikaron to celebration and joy.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Pesach Sheni",
        description: "The Second Passover, observed one month after Pesach. In ancient Israel, it offered an opportunity for those who were ritually impure or traveling during Pesach to bring the Passover offering to the Temple in Jerusalem. Today it's viewed as a symbol of second chances and spiritual renewal.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Lag BaOmer",
        description: "The 33rd day of the Omer count between Pesach and Shavuot, a joyful break in a traditionally somber period. Celebrations include bonfires, weddings, haircuts, and honoring Rabbi Shimon bar Yochai, a mystical sage traditionally believed to have died on this day.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Yom Yerushalayim",
        description: "Jerusalem Day commemorates the reunification of Jerusalem during the Six-Day War in 1967. Observances include prayer services, Torah study, parades, and celebrations throughout the city.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Sivan",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Sivan is the month of receiving the Torah at Mount Sinai and contains the holiday of Shavuot. Many use this time to prepare for Shavuot through study and reflection.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shavuot",
        description: "Shavuot celebrates the giving of the Torah at Mount Sinai and marks the spring harvest in ancient Israel. Traditions include all-night Torah study, reading the Book of Ruth, eating dairy foods, and decorating with greenery and flowers.",
        aliases: &["Erev Shavuot", "Shavuot I", "Shavuot II"],
    },
    HolidayDetails {
        title: "Rosh Chodesh Tamuz",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Tammuz contains the start of the Three Weeks, a period of mourning leading up to Tish'a B'Av that commemorates the destruction of the Temples and other tragedies in Jewish history.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Tzom Tammuz",
        description: "A fast day commemorating the breach of Jerusalem's walls by the Babylonians in ancient times, marking the beginning of the Three Weeks leading to Tish'a B'Av. A day for reflection on loss, unity, and rebuilding.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Av",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Av is the month of mourning, containing Tish'a B'Av, which commemorates the destruction of both Temples and other tragedies in Jewish history. The first nine days of the month are marked by increasingly solemn observances.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Shabbat Chazon",
        description: "The Shabbat immediately before Tish'a B'Av, named for the Haftarah from Isaiah that opens with 'Chazon' (The Vision). One of the most somber Shabbatot of the year, reflecting the approaching day of mourning.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Tish'a B'Av",
        description: "A major day of fasting and mourning commemorating the destruction of both the First and Second Temples in Jerusalem, along with other tragedies in Jewish history. Observances include fasting, reading the Book of Lamentations, and refraining from joyful activities.",
        aliases: &["Erev Tish'a B'Av", "Tish'a B'Av (observed)"],
    },
    HolidayDetails {
        title: "Shabbat Nachamu",
        description: "The Shabbat after Tish'a B'Av, named for the Haftarah from Isaiah that opens with 'Nachamu' (Comfort). It begins seven weeks of consoling and hopeful prophetic readings leading into the High Holy Days.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Tu B'Av",
        description: "A minor holiday associated with love, matchmaking, and new beginnings. Historically it marked joyful communal gatherings in ancient Israel, and in modern times it's celebrated as a Jewish day of love, similar to Valentine's Day.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Elul",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Elul is the month of preparation leading up to Rosh Hashanah and Yom Kippur. Many communities add daily shofar (ram's horn) blowing, special prayers, and increased reflection as preparation for the Days of Awe.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Hashana LaBehemot",
        description: "A minor New Year observed on the first of Elul, historically used in ancient Israel to calculate the age of animals for tithing purposes. Today it's largely educational, offering insight into how Jewish law organized agricultural practices and the calendar.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Leil Selichot",
        description: "The night when Ashkenazi communities begin reciting Selichot, penitential prayers in preparation for the High Holy Days. Often held at midnight, it's a powerful communal gathering of prayer, melodies, and reflection, marking the entry into the season of repentance.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Hashana",
        description: "The Jewish New Year, marking the beginning of the High Holy Days and a ten-day period of reflection leading to Yom Kippur. The holiday focuses on renewal, reflection, and repentance, marked by blowing the shofar (ram's horn), wearing white, festive meals with symbolic foods like apples and honey, and prayers for a sweet new year.",
        aliases: &["Erev Rosh Hashana", "Rosh Hashana II"],
    },
    HolidayDetails {
        title: "Shabbat Shuva",
        description: "The Shabbat between Rosh Hashanah and Yom Kippur, named for the Haftarah from Hosea that opens with 'Shuvah' (Return). The day is centered on themes of repentance and reconciliation. Many communities feature extended rabbinic sermons and a heightened spiritual atmosphere.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Tzom Gedaliah",
        description: "A fast day commemorating the assassination of Gedaliah ben Achikam, the Jewish governor of Judah appointed after the destruction of the First Temple. His murder by a fellow Jew ended the last remnant of Jewish autonomy in the land, serving as a reminder of how internal conflict can deepen tragedy.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Yom Kippur",
        description: "The Day of Atonement, the holiest and most solemn day of the Jewish year, concluding the ten days of repentance that begin with Rosh Hashanah. Observed through a 25-hour fast, intensive prayer, wearing white, and seeking forgiveness from God and others. The day concludes with the final shofar (ram's horn) blast of the High Holy Days.",
        aliases: &["Erev Yom Kippur"],
    },
    HolidayDetails {
        title: "Sukkot",
        description: "A week-long harvest festival celebrating the Israelites' journey through the wilderness after the Exodus from Egypt. Observed by dwelling in a sukkah (temporary shelter) and waving the Four Species: lulav (palm), etrog (citron), myrtle, and willow. A joyful holiday emphasizing gratitude, hospitality, and connection to nature.",
        aliases: &[
            "Erev Sukkot",
            "Sukkot I",
            "Sukkot II",
            "Sukkot III",
            "Sukkot III (CH''M)",
            "Sukkot IV",
            "Sukkot IV (CH''M)",
            "Sukkot V",
            "Sukkot V (CH''M)",
            "Sukkot VI",
            "Sukkot VI (CH''M)",
            "Sukkot VII",
            "Sukkot VII (Hoshana Raba)",
        ],
    },
    HolidayDetails {
        title: "Shmini Atzeret",
        description: "A distinct holiday immediately following Sukkot. The name means 'gathering' or 'assembly,' and it's seen as an intimate moment between God and the Jewish people after the larger Sukkot festival. Special prayers for rain mark the beginning of the rainy season in Israel. Outside of Israel, it's observed separately from Simchat Torah, while in Israel the two holidays are combined.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Simchat Torah",
        description: "A joyful celebration of completing the annual Torah reading cycle and immediately beginning it anew. Communities dance with Torah scrolls, sing, and celebrate their connection to Jewish learning and tradition.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Cheshvan",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Cheshvan is often called Mar-Cheshvan (bitter Cheshvan) because it contains no festivals or holidays. After the intensity of the High Holy Days and Sukkot, it's a quieter month for returning to routine and steady spiritual growth.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Sigd",
        description: "An Ethiopian Jewish holiday of spiritual renewal and longing for Jerusalem, observed 50 days after Yom Kippur. The day includes fasting, prayer, reading from the Book of Nehemiah, and festive meals celebrating community and tradition.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Kislev",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Kislev is the month that contains Chanukah, the Festival of Lights. As winter deepens, themes of light and hope become central, building anticipation for the holiday ahead.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Chanukah",
        description: "The eight-day Festival of Lights, commemorating the Maccabean revolt against Greek oppression and the rededication of the Temple in Jerusalem. According to tradition, when the Temple was reclaimed, only one day's worth of pure oil was found, yet it miraculously burned for eight days. Celebrated by lighting the menorah each night, playing dreidel, and eating fried foods like latkes and sufganiyot.",
        aliases: &[
            "Chanukah: 1st Night",
            "Chanukah: 2nd Night",
            "Chanukah: 3rd Night",
            "Chanukah: 4th Night",
            "Chanukah: 5th Night",
            "Chanukah: 6th Night",
            "Chanukah: 7th Night",
            "Chanukah: 8th Night",
            "Chanukah: 8th Day",
        ],
    },
    HolidayDetails {
        title: "Chag HaBanot",
        description: "A North African Jewish celebration during Chanukah honoring daughters and women's courage, particularly commemorating Judith's role in the Chanukah story. Observed with sweets, special blessings, and family gatherings, especially in Tunisian and Sephardic communities.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Rosh Chodesh Tevet",
        description: "Rosh Chodesh marks the beginning of each Hebrew month with special prayers and a festive tone. Tevet often overlaps with the final days of Chanukah and contains a fast day commemorating the siege of Jerusalem. A time of transition as the light of Chanukah fades into winter.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Asara B'Tevet",
        description: "A fast day commemorating the beginning of the Babylonian siege of Jerusalem, which ultimately led to the destruction of the First Temple. A day for reflection on communal resilience, vulnerability, and the consequences of division.",
        aliases: &[],
    },
    HolidayDetails {
        title: "Purim Meshulash",
        description: "A rare occurrence celebrated in Jerusalem and other cities that were walled in ancient times when Purim falls on Shabbat. Since certain Purim activities cannot be performed on Shabbat, the holiday's observances are distributed across three days: reading the Megillah on Friday, special prayers on Shabbat, and the festive meal and gift-giving on Sunday.",
        aliases: &[],
    },
];
