// src/resolve/builtin.rs
//! Override table for the League of Legends API reference page.

use super::registry::{OperationPatch as Op, Registry, RegistryError, ResourcePatch};
use super::types::Primitive;

impl Registry {
    /// Every resource the reference page documents, except skipped ones.
    pub fn builtin() -> Result<Registry, RegistryError> {
        Registry::builder()
            .resource("lol-static-data", static_data())
            .resource(
                "champion",
                ResourcePatch::new()
                    .operation("/champion", Op::named("ChampionStatuses"))
                    .operation("/champion/{id}", Op::named("ChampionStatus"))
                    .class("ChampionDto", "ChampionStatus")
                    .class("ChampionListDto", "ChampionStatuses"),
            )
            .resource(
                "current-game",
                ResourcePatch::new()
                    .operation("/getSpectatorGameInfo/{platformId}/{summonerId}", Op::named("SpectatorGameInfo"))
                    .class("BannedChampion", "CurrentGameBannedChampion")
                    .class("Rune", "CurrentGameRune")
                    .class("Mastery", "CurrentGameMastery")
                    .class("CurrentGameInfo", "CurrentGameInfo")
                    .class("CurrentGameParticipant", "CurrentGameParticipant")
                    .class("Observer", "CurrentGameObserver"),
            )
            .resource(
                "featured-games",
                ResourcePatch::new()
                    .operation("/featured", Op::named("FeaturedGames"))
                    .class("BannedChampion", "FeaturedGameBannedChampion")
                    .class("Participant", "FeaturedGameParticipant")
                    .class("Rune", "FeaturedGameRune")
                    .class("Mastery", "FeaturedGameMastery")
                    .class("Observer", "FeaturedGameObserver")
                    .class("FeaturedGames", "FeaturedGames")
                    .class("FeaturedGameInfo", "FeaturedGameInfo"),
            )
            .resource(
                "game",
                ResourcePatch::new()
                    .operation("/game/by-summoner/{summonerId}/recent", Op::named("RecentGames"))
                    .class("GameDto", "Game")
                    .class("RecentGamesDto", "RecentGames")
                    .class("RawStatsDto", "GamePlayerRawStats")
                    .class("PlayerDto", "GamePlayer"),
            )
            .resource(
                "league",
                ResourcePatch::new()
                    .operation("/league/by-summoner/{summonerIds}", Op::named("LeaguesBySummonerID"))
                    .operation("/league/by-summoner/{summonerIds}/entry", Op::named("LeagueEntriesBySummonerID"))
                    .operation("/league/by-team/{teamIds}", Op::named("LeaguesByTeamID"))
                    .operation("/league/by-team/{teamIds}/entry", Op::named("LeagueEntriesByTeamID"))
                    .operation("/league/challenger", Op::named("Challenger"))
                    .operation("/league/master", Op::named("Master"))
                    .class("MiniSeriesDto", "MiniSeries")
                    .class("LeagueEntryDto", "LeagueEntry")
                    .class("LeagueDto", "League"),
            )
            .resource(
                "lol-status",
                ResourcePatch::new()
                    .operation("/shards", Op::named("Shards"))
                    .operation("/shards/{region}", Op::named("ShardsInRegion"))
                    .operation("/shards/{shard}", Op::named("Shard"))
                    .class("Shard", "Shard")
                    .class("ShardStatus", "ShardStatus")
                    .class("Service", "Service")
                    .class("Message", "StatusMessage")
                    .class("Translation", "StatusMessageTranslation")
                    .class("Incident", "Incident"),
            )
            .resource("match", match_())
            .resource(
                "matchlist",
                ResourcePatch::new()
                    .operation("/matchlist/by-summoner/{summonerId}", Op::named("MatchesBySummonerID"))
                    .class("MatchList", "Matches")
                    .class("MatchReference", "MatchRef"),
            )
            .resource(
                "stats",
                ResourcePatch::new()
                    .operation("/stats/by-summoner/{summonerId}/ranked", Op::named("RankedStats"))
                    .operation("/stats/by-summoner/{summonerId}/summary", Op::named("StatsSummary"))
                    .class("RankedStatsDto", "RankedStats")
                    .class("PlayerStatsSummaryDto", "PlayerStatsSummary")
                    .class("PlayerStatsSummaryListDto", "PlayerStatsSummaries")
                    .class("AggregatedStatsDto", "AggregatedStats")
                    .class("ChampionStatsDto", "PlayerChampionStats"),
            )
            .resource(
                "summoner",
                ResourcePatch::new()
                    .operation("/summoner/by-name/{summonerNames}", Op::named("SummonersByName"))
                    .operation("/summoner/{summonerIds}", Op::named("Summoners").map_key(Primitive::Int64))
                    .operation("/summoner/{summonerIds}/masteries", Op::named("MasteryPages").map_key(Primitive::Int64))
                    .operation("/summoner/{summonerIds}/name", Op::named("SummonerNames").map_key(Primitive::Int64))
                    .operation("/summoner/{summonerIds}/runes", Op::named("RunePages").map_key(Primitive::Int64))
                    .class("MasteryDto", "EquippedMastery")
                    .class("MasteryPageDto", "MasteryPage")
                    .class("MasteryPagesDto", "MasteryPages")
                    .class("RuneSlotDto", "RuneSlot")
                    .class("RunePageDto", "RunePage")
                    .class("RunePagesDto", "RunePages")
                    .class("SummonerDto", "Summoner"),
            )
            .resource(
                "team",
                ResourcePatch::new()
                    .operation("/team/by-summoner/{summonerIds}", Op::named("TeamsBySummonerID").map_key(Primitive::Int64))
                    .operation("/team/{teamIds}", Op::named("Teams"))
                    .class("TeamDto", "Team")
                    .class("MatchHistorySummaryDto", "TeamMatchHistorySummary")
                    .class("TeamStatDetailDto", "TeamStatDetails")
                    .class("TeamMemberInfoDto", "TeamMemberInfo")
                    .class("RosterDto", "TeamRoster"),
            )
            .resource(
                "championmastery",
                ResourcePatch::new()
                    .operation(
                        "/championmastery/location/{platformId}/player/{playerId}/champion/{championId}",
                        Op::named("ChampionMastery"),
                    )
                    .operation(
                        "/championmastery/location/{platformId}/player/{playerId}/champions",
                        Op::named("ChampionMasteries"),
                    )
                    .operation(
                        "/championmastery/location/{platformId}/player/{playerId}/score",
                        Op::named("ChampionMasteryScore"),
                    )
                    .operation(
                        "/championmastery/location/{platformId}/player/{playerId}/topchampions",
                        Op::named("TopChampions"),
                    )
                    .class("ChampionMasteryDTO", "ChampionMastery"),
            )
            .build()
    }
}

fn static_data() -> ResourcePatch {
    let ops = [
        ("/champion", "Champions"),
        ("/champion/{id}", "Champion"),
        ("/item", "Items"),
        ("/item/{id}", "Item"),
        ("/language-strings", "LanguageStrings"),
        ("/languages", "Languages"),
        ("/map", "Maps"),
        ("/mastery", "Masteries"),
        ("/mastery/{id}", "Mastery"),
        ("/realm", "Realm"),
        ("/rune", "Runes"),
        ("/rune/{id}", "Rune"),
        ("/summoner-spell", "SummonerSpells"),
        ("/summoner-spell/{id}", "SummonerSpell"),
        ("versions", "Versions"),
    ];
    let classes = [
        ("ImageDto", "Image"),
        ("ChampionDto", "Champion"),
        ("ChampionListDto", "Champions"),
        ("MapDetailsDto", "Map"),
        ("MapDataDto", "Maps"),
        ("ChampionSpellDto", "ChampionSpell"),
        ("SummonerSpellDto", "SummonerSpell"),
        ("SummonerSpellListDto", "SummonerSpells"),
        ("ItemDto", "Item"),
        ("ItemListDto", "Items"),
        ("GoldDto", "Gold"),
        ("StatsDto", "ChampionStats"),
        ("GroupDto", "ItemGroup"),
        ("InfoDto", "ChampionInfo"),
        ("SkinDto", "Skin"),
        ("RecommendedDto", "Recommended"),
        ("BlockDto", "RecommendedBlock"),
        ("BlockItemDto", "RecommendedItems"),
        ("ItemTreeDto", "ItemTree"),
        ("MasteryDto", "Mastery"),
        ("MasteryListDto", "Masteries"),
        ("MasteryTreeItemDto", "MasteryTreeItem"),
        ("MasteryTreeDto", "MasteryTree"),
        ("MasteryTreeListDto", "MasteryTrees"),
        ("RuneDto", "Rune"),
        ("RuneListDto", "Runes"),
        ("MetaDataDto", "RuneMetadata"),
        ("PassiveDto", "Passive"),
        ("SpellVarsDto", "SpellVars"),
        ("BasicDataDto", "BasicData"),
        ("BasicDataStatsDto", "BasicStats"),
        ("LanguageStringsDto", "LanguageStrings"),
        ("LevelTipDto", "LevelTip"),
        ("RealmDto", "Realm"),
    ];

    let patch = ops
        .into_iter()
        .fold(ResourcePatch::new(), |p, (suffix, name)| p.operation(suffix, Op::named(name)));
    classes
        .into_iter()
        .fold(patch, |p, (orig, target)| p.class(orig, target))
}

fn match_() -> ResourcePatch {
    let classes = [
        ("BannedChampion", "BannedChampion"),
        ("Timeline", "Timeline"),
        ("Frame", "Frame"),
        ("Event", "Event"),
        ("Position", "Position"),
        ("Team", "MatchTeam"),
        ("Participant", "Participant"),
        ("ParticipantStats", "ParticipantStats"),
        ("ParticipantIdentity", "ParticipantIdentity"),
        ("ParticipantFrame", "ParticipantFrame"),
        ("ParticipantStatus", "ParticipantStatus"),
        ("ParticipantTimeline", "ParticipantTimeline"),
        ("ParticipantTimelineData", "ParticipantTimelineData"),
        ("Player", "Player"),
        ("Mastery", "UsedMastery"),
        ("Rune", "UsedRune"),
        ("MatchDetail", "MatchDetail"),
    ];

    let patch = ResourcePatch::new()
        .operation("/match/{matchId}", Op::named("Match"))
        .operation("/match/by-tournament/{tournamentCode}/ids", Op::named("MatchesByTournament"))
        .operation("/match/for-tournament/{matchId}", Op::named("MatchForTournament"));
    classes
        .into_iter()
        .fold(patch, |p, (orig, target)| p.class(orig, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Type;

    #[test]
    fn builtin_table_builds() {
        let reg = Registry::builtin().unwrap();
        for id in ["lol-static-data", "summoner", "lol-status", "championmastery"] {
            assert!(reg.contains(id), "{id}");
        }
        assert!(!reg.contains("tournament-provider"));
    }

    #[test]
    fn summoner_maps_are_keyed_by_id() {
        let reg = Registry::builtin().unwrap();
        let op = reg.operation("summoner", "/api/lol/{region}/v1.4/summoner/{summonerIds}/runes").unwrap();
        assert_eq!(op.name(), "RunePages");
        assert_eq!(op.key_hint(), Some(Primitive::Int64));

        let op = reg.operation("summoner", "/api/lol/{region}/v1.4/summoner/by-name/{summonerNames}").unwrap();
        assert_eq!(op.name(), "SummonersByName");
        assert_eq!(op.key_hint(), None);
    }

    #[test]
    fn same_class_name_differs_per_resource() {
        let reg = Registry::builtin().unwrap();
        assert_eq!(reg.class_type("match", "Rune").unwrap(), Type::named("UsedRune"));
        assert_eq!(reg.class_type("current-game", "Rune").unwrap(), Type::named("CurrentGameRune"));
        assert_eq!(reg.class_type("featured-games", "Rune").unwrap(), Type::named("FeaturedGameRune"));
    }

    #[test]
    fn static_data_versions_matches_without_slash() {
        let reg = Registry::builtin().unwrap();
        let op = reg.operation("lol-static-data", "/api/lol/static-data/{region}/v1.2/versions").unwrap();
        assert_eq!(op.name(), "Versions");
    }
}
