//! Torah ranges and summaries for the 54 weekly portions, in reading order.

use super::ParshaDetails;

pub(super) const PARSHIOT: [ParshaDetails; 54] = [
    ParshaDetails {
        name: "Bereshit",
        verses: "Genesis 1:1–6:8",
        summary: "The Torah begins with creation: the world is formed in six days, and humanity is placed in the Garden of Eden. After the first sin leads to exile, violence spreads across the earth, setting the stage for the flood.",
    },
    ParshaDetails {
        name: "Noach",
        verses: "Genesis 6:9–11:32",
        summary: "Noah builds an ark and survives the flood that destroys the corrupt world. God makes a covenant with humanity symbolized by the rainbow, but the Tower of Babel leads to the scattering of nations and languages.",
    },
    ParshaDetails {
        name: "Lech-Lecha",
        verses: "Genesis 12:1–17:27",
        summary: "God calls Abram to leave his homeland for a promised land and descendants. The covenant is established, Abram and Sarai receive new names, and circumcision is introduced as a sign of the covenant.",
    },
    ParshaDetails {
        name: "Vayera",
        verses: "Genesis 18:1–22:24",
        summary: "Abraham welcomes three visitors and pleads with God to spare Sodom, while Sarah miraculously gives birth to Isaac. The portion reaches its climax with the Binding of Isaac, a profound test of Abraham's faith.",
    },
    ParshaDetails {
        name: "Chayei Sara",
        verses: "Genesis 23:1–25:18",
        summary: "After Sarah's death, Abraham purchases the Cave of Machpelah as the family's burial place. Abraham's servant finds Rebecca as a wife for Isaac, continuing the covenant into the next generation.",
    },
    ParshaDetails {
        name: "Toldot",
        verses: "Genesis 25:19–28:9",
        summary: "Twin brothers Jacob and Esau struggle from birth, competing for birthright and blessing. Jacob deceives Isaac to receive the blessing meant for Esau, forcing him to flee from his brother's anger.",
    },
    ParshaDetails {
        name: "Vayetzei",
        verses: "Genesis 28:10–32:3",
        summary: "Jacob dreams of a ladder reaching to heaven and continues his journey in exile to Laban's house. He marries Leah and Rachel, works for many years, and eventually departs with his growing family to return home.",
    },
    ParshaDetails {
        name: "Vayishlach",
        verses: "Genesis 32:4–36:43",
        summary: "Jacob prepares anxiously to meet Esau and wrestles with a mysterious figure through the night, emerging with a new name: Israel. The brothers reunite peacefully, and Jacob's family continues despite tragedy and conflict.",
    },
    ParshaDetails {
        name: "Vayeshev",
        verses: "Genesis 37:1–40:23",
        summary: "Joseph's dreams and his father's favoritism lead his brothers to sell him into slavery in Egypt. In Egypt, Joseph faces false accusation and imprisonment, where he begins interpreting dreams.",
    },
    ParshaDetails {
        name: "Miketz",
        verses: "Genesis 41:1–44:17",
        summary: "Joseph interprets Pharaoh's dreams about seven years of plenty followed by famine, and rises to become second in command of Egypt. When his brothers arrive seeking food, Joseph tests them without revealing his identity.",
    },
    ParshaDetails {
        name: "Vayigash",
        verses: "Genesis 44:18–47:27",
        summary: "Judah pleads passionately for Benjamin's release, and Joseph finally reveals himself to his brothers. The family is reunited and settles in Egypt, where Jacob blesses Pharaoh and the family begins a new chapter.",
    },
    ParshaDetails {
        name: "Vayechi",
        verses: "Genesis 47:28–50:26",
        summary: "Jacob blesses each of his sons, shaping the destiny of the twelve tribes of Israel. Joseph reassures his brothers of forgiveness, and the Book of Genesis closes with faith in God's promise of return to the land.",
    },
    ParshaDetails {
        name: "Shemot",
        verses: "Exodus 1:1–6:1",
        summary: "The Israelites multiply in Egypt and are enslaved by a fearful Pharaoh. Moses is born, saved from death, and called by God at the burning bush to lead the people to freedom.",
    },
    ParshaDetails {
        name: "Vaera",
        verses: "Exodus 6:2–9:35",
        summary: "God reveals the divine name and promises to redeem Israel from slavery. Moses and Aaron return to Pharaoh, and the first seven plagues strike Egypt, demonstrating God's power while Pharaoh's heart remains hardened.",
    },
    ParshaDetails {
        name: "Bo",
        verses: "Exodus 10:1–13:16",
        summary: "The final three plagues culminate in the death of Egypt's firstborn and Pharaoh's release of the Israelites. The first Passover is observed, establishing rituals of remembrance that will endure for generations.",
    },
    ParshaDetails {
        name: "Beshalach",
        verses: "Exodus 13:17–17:16",
        summary: "Israel crosses the Sea of Reeds as the waters part, and Moses and Miriam lead the people in song. In the wilderness, the people receive manna from heaven and learn to trust God day by day.",
    },
    ParshaDetails {
        name: "Yitro",
        verses: "Exodus 18:1–20:23",
        summary: "Moses' father-in-law Jethro advises him to establish a system of judges to help lead the people. At Mount Sinai, God speaks the Ten Commandments directly to all of Israel in a moment of revelation and awe.",
    },
    ParshaDetails {
        name: "Mishpatim",
        verses: "Exodus 21:1–24:18",
        summary: "A collection of civil and ethical laws governs daily life, covering topics from slavery to property to justice. The covenant is formalized in a ceremony, and Moses ascends the mountain to receive further instruction.",
    },
    ParshaDetails {
        name: "Terumah",
        verses: "Exodus 25:1–27:19",
        summary: "God commands the Israelites to bring offerings to build the Mishkan, a portable sanctuary for the Divine Presence. Detailed instructions describe the ark, menorah, altar, and other sacred furnishings.",
    },
    ParshaDetails {
        name: "Tetzaveh",
        verses: "Exodus 27:20–30:10",
        summary: "The priestly garments are described in detail, including the ephod, breastplate, and headpiece. Aaron and his sons are consecrated for service, and the eternal light is commanded to burn continually in the sanctuary.",
    },
    ParshaDetails {
        name: "Ki Tisa",
        verses: "Exodus 30:11–34:35",
        summary: "While Moses is on the mountain, the people build a Golden Calf, breaking the covenant. Moses intercedes for the people, the tablets are shattered and remade, and God renews the covenant with Israel.",
    },
    ParshaDetails {
        name: "Vayakhel",
        verses: "Exodus 35:1–38:20",
        summary: "Moses gathers the community and reminds them of Shabbat before beginning work on the Mishkan. The people bring abundant offerings, and skilled artisans begin crafting the sacred objects.",
    },
    ParshaDetails {
        name: "Pekudei",
        verses: "Exodus 38:21–40:38",
        summary: "A detailed accounting is given of all materials used in building the Mishkan. The Mishkan is completed, erected, and filled with God's glory, marking the culmination of the Exodus journey.",
    },
    ParshaDetails {
        name: "Vayikra",
        verses: "Leviticus 1:1–5:26",
        summary: "God calls to Moses from the Mishkan and describes the system of sacrificial offerings. Different types of offerings express gratitude, seek atonement, and foster a relationship between the people and God.",
    },
    ParshaDetails {
        name: "Tzav",
        verses: "Leviticus 6:1–8:36",
        summary: "Detailed instructions are given to the priests about their duties in handling the various offerings. Aaron and his sons undergo a seven-day consecration ceremony to begin their service in the Mishkan.",
    },
    ParshaDetails {
        name: "Shmini",
        verses: "Leviticus 9:1–11:47",
        summary: "On the eighth day, Aaron and his sons begin their priestly service, but tragedy strikes when Nadav and Avihu die after offering unauthorized fire. The portion also introduces the laws of kosher animals, linking holiness to daily choices.",
    },
    ParshaDetails {
        name: "Tazria",
        verses: "Leviticus 12:1–13:59",
        summary: "Laws of ritual purity following childbirth are given, followed by detailed procedures for diagnosing tzara'at, a skin affliction. The priest's role is to examine and determine purity status, protecting the community's holiness.",
    },
    ParshaDetails {
        name: "Metzora",
        verses: "Leviticus 14:1–15:33",
        summary: "The purification process for someone healed of tzara'at involves ritual washing, offerings, and gradual reintegration into the community. Additional laws address bodily discharges and maintaining purity in the camp.",
    },
    ParshaDetails {
        name: "Achrei Mot",
        verses: "Leviticus 16:1–18:30",
        summary: "After the deaths of Aaron's sons, God establishes the Yom Kippur service, including the scapegoat ritual that carries away the people's sins. Laws of sexual ethics follow, establishing boundaries that protect holiness and family integrity.",
    },
    ParshaDetails {
        name: "Kedoshim",
        verses: "Leviticus 19:1–20:27",
        summary: "God commands Israel to be holy, expressed through ethical behavior: honoring parents, caring for the poor, honest business practices, and justice. The commandment to love your neighbor as yourself stands at the center of this holiness code.",
    },
    ParshaDetails {
        name: "Emor",
        verses: "Leviticus 21:1–24:23",
        summary: "Special standards are set for the priests, who must maintain a higher level of holiness in their personal lives. The sacred calendar is outlined, including Shabbat and the festivals, structuring time around holiness and community.",
    },
    ParshaDetails {
        name: "Behar",
        verses: "Leviticus 25:1–26:2",
        summary: "The Sabbatical and Jubilee years are introduced, requiring the land to rest every seven years and property to be returned every fifty years. These laws emphasize that the land ultimately belongs to God, held in trust by the people.",
    },
    ParshaDetails {
        name: "Bechukotai",
        verses: "Leviticus 26:3–27:34",
        summary: "God presents blessings for following the covenant and severe consequences for abandoning it. The book of Leviticus concludes with laws about vows and dedications, linking devotion to concrete action.",
    },
    ParshaDetails {
        name: "Bamidbar",
        verses: "Numbers 1:1–4:20",
        summary: "Israel is counted by tribe and family, organizing the camp around the Mishkan in the wilderness. The Levites are assigned specific duties in caring for and transporting the sacred objects.",
    },
    ParshaDetails {
        name: "Nasso",
        verses: "Numbers 4:21–7:89",
        summary: "The census continues with the Levite clans, and laws are given for the Nazirite vow and the priestly blessing. The tribal leaders bring offerings to dedicate the altar over twelve days.",
    },
    ParshaDetails {
        name: "Beha'alotcha",
        verses: "Numbers 8:1–12:16",
        summary: "Aaron lights the menorah, and the Israelites begin their journey through the wilderness guided by the cloud. Complaints arise about the manna, and Miriam and Aaron speak against Moses, resulting in Miriam's affliction with tzara'at.",
    },
    ParshaDetails {
        name: "Sh'lach",
        verses: "Numbers 13:1–15:41",
        summary: "Moses sends twelve spies to scout the Promised Land, but ten return with a fearful report that demoralizes the people. As punishment, that generation is condemned to wander forty years in the wilderness, and laws of tzitzit are given as a reminder of God's commandments.",
    },
    ParshaDetails {
        name: "Korach",
        verses: "Numbers 16:1–18:32",
        summary: "Korach leads a rebellion against Moses and Aaron, challenging their authority and the priestly system. The earth swallows the rebels, and Aaron's staff miraculously blossoms, confirming the divine choice of leadership.",
    },
    ParshaDetails {
        name: "Chukat",
        verses: "Numbers 19:1–22:1",
        summary: "The mysterious ritual of the red heifer provides purification from contact with death. Miriam and Aaron die, Moses strikes the rock instead of speaking to it, and Israel defeats their enemies as they approach the Promised Land.",
    },
    ParshaDetails {
        name: "Balak",
        verses: "Numbers 22:2–25:9",
        summary: "King Balak hires the prophet Balaam to curse Israel, but God turns every curse into a blessing. The portion ends with Israel's moral failure at Peor, resulting in a plague that is stopped by Pinchas's zealous action.",
    },
    ParshaDetails {
        name: "Pinchas",
        verses: "Numbers 25:10–30:1",
        summary: "Pinchas is rewarded with a covenant of peace for his zealous defense of God's honor. A new census prepares the next generation to enter the land, and the daughters of Zelophehad successfully petition for inheritance rights.",
    },
    ParshaDetails {
        name: "Matot",
        verses: "Numbers 30:2–32:42",
        summary: "Laws governing vows emphasize the binding power of speech and personal responsibility. Israel wages war against Midian, and the tribes of Reuben and Gad negotiate to settle east of the Jordan River.",
    },
    ParshaDetails {
        name: "Masei",
        verses: "Numbers 33:1–36:13",
        summary: "The forty-two journeys of Israel through the wilderness are reviewed, mapping their path from Egypt to the border of Canaan. The boundaries of the land are defined, and cities of refuge are established for those who accidentally kill.",
    },
    ParshaDetails {
        name: "Devarim",
        verses: "Deuteronomy 1:1–3:22",
        summary: "Moses begins his final speeches to Israel, reviewing their journey from Sinai and recalling the failed spy mission. He reminds the people of God's faithfulness and urges them to learn from past mistakes as they prepare to enter the land.",
    },
    ParshaDetails {
        name: "Vaetchanan",
        verses: "Deuteronomy 3:23–7:11",
        summary: "Moses pleads to enter the land but is denied, and instead charges Joshua to lead the people. He repeats the Ten Commandments and teaches the Shema, declaring God's unity and commanding love, memory, and faithful teaching to future generations.",
    },
    ParshaDetails {
        name: "Eikev",
        verses: "Deuteronomy 7:12–11:25",
        summary: "Moses warns against forgetting God when prosperity comes in the land. He reminds Israel of their rebellions in the wilderness and emphasizes that obedience flows from gratitude, not from their own righteousness.",
    },
    ParshaDetails {
        name: "Re'eh",
        verses: "Deuteronomy 11:26–16:17",
        summary: "Moses presents a choice between blessing and curse, tied to obedience and faithfulness. Laws follow concerning centralized worship, care for the poor, kosher food, and the observance of the three pilgrimage festivals.",
    },
    ParshaDetails {
        name: "Shoftim",
        verses: "Deuteronomy 16:18–21:9",
        summary: "A system of judges and courts is established to pursue justice faithfully. Laws address prophecy, warfare, and the responsibilities of kings, and the portion ends with procedures for unsolved murders to maintain communal accountability.",
    },
    ParshaDetails {
        name: "Ki Teitzei",
        verses: "Deuteronomy 21:10–25:19",
        summary: "More laws than any other portion cover family life, property, business ethics, and compassion for the vulnerable. The portion concludes with the command to remember Amalek's unprovoked attack on the weak and weary.",
    },
    ParshaDetails {
        name: "Ki Tavo",
        verses: "Deuteronomy 26:1–29:8",
        summary: "The ritual of bringing first fruits includes a recitation of Israel's history from slavery to freedom. Moses then delivers blessings for obedience and curses for disobedience, emphasizing the consequences of covenantal choice.",
    },
    ParshaDetails {
        name: "Nitzavim",
        verses: "Deuteronomy 29:9–30:20",
        summary: "All of Israel stands together to renew the covenant before entering the land. Moses assures the people that repentance and return to God are always possible, and he urges them to choose life and blessing.",
    },
    ParshaDetails {
        name: "Vayeilech",
        verses: "Deuteronomy 31:1–30",
        summary: "Moses announces that he will not cross into the land and commissions Joshua as his successor. The Torah is written down and entrusted to the Levites, with instructions for public reading every seven years.",
    },
    ParshaDetails {
        name: "Ha'azinu",
        verses: "Deuteronomy 32:1–52",
        summary: "Moses delivers a poetic song that recounts Israel's history, God's faithfulness, and the people's repeated failures. The song serves as a witness and warning, calling future generations to remember and return.",
    },
    ParshaDetails {
        name: "Vezot Haberakhah",
        verses: "Deuteronomy 33:1–34:12",
        summary: "Moses blesses each tribe individually, expressing hope for their future in the land. He then ascends Mount Nebo, views the Promised Land, and dies, leaving a legacy of unparalleled prophecy and leadership.",
    },
];
